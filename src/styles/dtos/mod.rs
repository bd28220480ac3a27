pub mod suggest_styles_dto;
