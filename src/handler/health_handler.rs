pub const BANNER: &str = "Drone Shop Server is Running.....";

pub async fn root_handler() -> &'static str {
    BANNER
}

pub async fn health_handler() -> &'static str {
    "OK"
}
