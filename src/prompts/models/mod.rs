pub mod explore_prompt;
pub mod upscaled_prompt;
