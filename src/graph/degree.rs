//! 度数类型

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 度数种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeKind {
    /// 总度数（入度 + 出度）
    Total,
    /// 入度
    In,
    /// 出度
    Out,
}

impl DegreeKind {
    /// 获取名称
    pub fn name(&self) -> &'static str {
        match self {
            DegreeKind::Total => "total",
            DegreeKind::In => "in",
            DegreeKind::Out => "out",
        }
    }

    /// 从名称解析
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "total" | "t" => Some(DegreeKind::Total),
            "in" | "i" => Some(DegreeKind::In),
            "out" | "o" => Some(DegreeKind::Out),
            _ => None,
        }
    }

    /// 菜单编号: 1=总度数, 2=入度, 3=出度
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(DegreeKind::Total),
            2 => Some(DegreeKind::In),
            3 => Some(DegreeKind::Out),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            DegreeKind::Total => 1,
            DegreeKind::In => 2,
            DegreeKind::Out => 3,
        }
    }

    /// 所有度数种类
    pub fn all() -> Vec<Self> {
        vec![DegreeKind::Total, DegreeKind::In, DegreeKind::Out]
    }
}

impl fmt::Display for DegreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DegreeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(code) = s.trim().parse::<i64>() {
            return Self::from_code(code)
                .ok_or_else(|| Error::ParseError(format!("未知的度数类型编号: {}", code)));
        }
        Self::from_name(s).ok_or_else(|| Error::ParseError(format!("未知的度数类型: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_kind_codes() {
        for kind in DegreeKind::all() {
            assert_eq!(DegreeKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DegreeKind::from_code(0), None);
        assert_eq!(DegreeKind::from_code(4), None);
    }

    #[test]
    fn test_degree_kind_from_str() {
        assert_eq!("2".parse::<DegreeKind>().unwrap(), DegreeKind::In);
        assert_eq!("OUT".parse::<DegreeKind>().unwrap(), DegreeKind::Out);
        assert_eq!(" total ".parse::<DegreeKind>().unwrap(), DegreeKind::Total);
        assert!(matches!(
            "9".parse::<DegreeKind>(),
            Err(Error::ParseError(_))
        ));
        assert!("sideways".parse::<DegreeKind>().is_err());
    }
}
