pub mod select_example_dto;
