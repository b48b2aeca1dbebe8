#[derive(Debug, Clone)]
pub struct CreateAuthorInput {
    pub name: String,
}
