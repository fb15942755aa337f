/// Instruction text placed at the head of every conversation that does not
/// already open with a system turn.
pub const SYSTEM_PROMPT: &str = include_str!("prompts/system_prompt.md");
