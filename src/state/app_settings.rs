use log::LevelFilter;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
}

impl AppSettings {
    pub fn load() -> Self {
        // PITVIEW_LOG accepts the usual levels (error, warn, info, debug, trace).
        let log_level = std::env::var("PITVIEW_LOG")
            .ok()
            .and_then(|value| value.parse::<LevelFilter>().ok());
        Self { full_screen: false, log_level }
    }
}
