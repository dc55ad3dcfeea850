#[derive(Debug, Clone)]
pub struct CustomError {
    pub message: String
}
