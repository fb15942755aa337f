pub(crate) mod http_errors;
pub mod ollama;
pub mod openai;

#[cfg(test)]
pub(crate) mod test_server;
