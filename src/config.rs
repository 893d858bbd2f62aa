use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub listen_addr: String,
    #[serde(default)]
    pub db_logging: bool,
}
