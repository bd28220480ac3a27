pub mod gemini_error_response;
pub mod gemini_generate_content_response;
