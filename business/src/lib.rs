pub mod application {
    pub mod chat {
        pub mod ask;
    }
}

pub mod domain {
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
        }
    }
}
