use clap::Parser;
use std::net::SocketAddr;

#[derive(Clone, Debug, Parser)]
pub struct AdminApiConfig {
    #[clap(
        short,
        long,
        env = "ADMIN_API_BIND_ADDR",
        default_value = "0.0.0.0:4000"
    )]
    pub bind_addr: SocketAddr,

    /// Origin allowed by the CORS layer, also reported in request logs.
    #[clap(
        long,
        env = "ADMIN_API_PUBLIC_URL",
        default_value = "http://localhost:4000"
    )]
    pub public_url: String,

    /// Print the OpenAPI document to stdout and exit instead of serving.
    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    #[clap(
        long,
        env = "ADMIN_API_MONGODB_URI",
        default_value = "mongodb://localhost:27017/admin_panel"
    )]
    pub mongodb_uri: String,
}
