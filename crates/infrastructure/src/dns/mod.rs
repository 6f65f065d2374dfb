pub mod record_mapper;

pub use record_mapper::RecordMapper;
