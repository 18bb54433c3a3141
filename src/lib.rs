pub mod chart {
    pub mod chart;
    pub mod chartoptions;
    pub mod charterror;
    pub mod counterrecord;
    pub mod countersource;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewisepolynomial;
        }
    }

    pub mod differentiator {
        pub mod derivative;
    }

    pub mod kernel {
        pub mod impulseresponse;
        pub mod unity;
        pub mod firstorder;
        pub mod brickwall;
        pub mod timeshift;
        pub mod forwardbackward;
    }

    pub mod reconstruction {
        pub mod interpolatefilter;
    }

    pub mod specialfunction;
    pub mod utility;
}

pub mod time {
    pub mod duration;
}
