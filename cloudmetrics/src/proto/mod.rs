// The google apis use enum variant names that clippy dislikes
#[allow(clippy::all)]
#[rustfmt::skip]
pub mod google {
    pub mod api {
        include!("google.api.rs");
    }
    pub mod monitoring {
        pub mod v3 {
            include!("google.monitoring.v3.rs");
        }
    }
}
