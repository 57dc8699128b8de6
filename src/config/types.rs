use serde::{Deserialize, Serialize};
use std::fmt;

/// 檔案掃描後的處理順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryOrder {
    /// 依作業系統列出的順序
    #[default]
    FileSystem,
    /// 依檔名字典序排序
    Lexicographic,
}

impl fmt::Display for DiscoveryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem => write!(f, "檔案系統順序"),
            Self::Lexicographic => write!(f, "依檔名排序"),
        }
    }
}

/// 目標檔案已存在時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// 直接覆寫，後寫入者為準
    #[default]
    Overwrite,
    /// 保留既有檔案並跳過
    Skip,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "覆寫既有檔案"),
            Self::Skip => write!(f, "跳過既有檔案"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub discovery_order: DiscoveryOrder,
    pub collision_policy: CollisionPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
