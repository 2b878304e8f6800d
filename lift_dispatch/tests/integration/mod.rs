mod config_load;
mod properties;
mod scenario;
