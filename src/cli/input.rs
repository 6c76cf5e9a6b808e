//! 输入源
//!
//! 交互模式使用 rustyline，测试和脚本使用预置行

use crate::error::{Error, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;

/// 按行读取输入
pub trait LineSource {
    /// 显示提示并读取一行；输入结束时返回 `Error::InputClosed`
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// 基于 rustyline 的行编辑输入
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| Error::InputError(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(line)
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Err(Error::InputClosed),
            Err(e) => Err(Error::InputError(e.to_string())),
        }
    }
}

/// 预置行输入
#[derive(Debug, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// 剩余行数
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines.pop_front().ok_or(Error::InputClosed)
    }
}
