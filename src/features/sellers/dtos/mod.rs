mod sign_up_dto;

pub use sign_up_dto::SignUpRequestDto;
