pub mod page_dto;
