use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum CheckError {
    Io(String),
    Timeout(String),
    Parse(String),
}

impl Display for CheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::Io(msg) => write!(f, "I/O Error: {}", msg),
            CheckError::Timeout(msg) => write!(f, "Timeout Error: {}", msg),
            CheckError::Parse(msg) => write!(f, "Parse Error: {}", msg),
        }
    }
}

impl From<std::io::Error> for CheckError {
    fn from(error: std::io::Error) -> Self {
        CheckError::Io(error.to_string())
    }
}
