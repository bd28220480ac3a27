pub mod upscale_prompt_dto;
