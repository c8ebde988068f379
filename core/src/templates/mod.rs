// 模板系统：Schema定义、语法/结构校验、保存编排

pub mod model;
pub mod schema;
pub mod service;
pub mod validate;
