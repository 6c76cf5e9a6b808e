//! 交互式命令行
//!
//! 数字菜单 shell：读取选项、提示参数、调用图操作并打印结果

mod commands;
mod config;
mod input;
mod menu;
mod printer;

pub use commands::{CommandResult, Shell};
pub use config::ShellConfig;
pub use input::{LineSource, ReadlineSource, ScriptedSource};
pub use menu::{parse_option, MenuOption};
pub use printer::{format_ids, Printer};
