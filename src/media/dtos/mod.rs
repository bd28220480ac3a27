pub mod edit_image_dto;
pub mod generate_image_dto;
pub mod upscale_image_dto;
