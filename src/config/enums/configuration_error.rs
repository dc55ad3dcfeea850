use std::io;

#[derive(Debug)]
pub enum ConfigurationError {
    IOError(io::Error),
    ParseError(toml::de::Error),
}
