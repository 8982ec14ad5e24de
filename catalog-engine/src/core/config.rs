use std::path::PathBuf;

/// 引擎配置 - 目录引擎的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/catalog-engine | 工作目录 |
/// | STORAGE_FILE | catalog.redb | 持久存储文件名 |
/// | STORAGE_CAPACITY_BYTES | 5242880 | 持久存储容量上限 (~5MB) |
/// | DOCS_ROOT | /brochures | 产品手册 URL 前缀 |
/// | MEDIA_ROOT | /Two-way-Radios | 产品图片 URL 前缀 |
/// | ADMIN_ACCESS_KEY | vkt2026 | 管理端共享口令 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/catalog STORAGE_CAPACITY_BYTES=10485760 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放持久存储文件
    pub work_dir: String,
    /// 持久存储文件名
    pub storage_file: String,
    /// 持久存储容量上限（字节）。写入会在超限前被整体拒绝。
    pub storage_capacity_bytes: u64,
    /// 产品手册文档根前缀
    pub docs_root: String,
    /// 静态产品图片根前缀
    pub media_root: String,
    /// 管理端共享口令（明文比较，按设计不做加固）
    pub admin_access_key: String,
}

/// Practical ceiling of the original client-side store (~5MB quota).
pub const DEFAULT_STORAGE_CAPACITY_BYTES: u64 = 5 * 1024 * 1024;

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/catalog-engine".into()),
            storage_file: std::env::var("STORAGE_FILE").unwrap_or_else(|_| "catalog.redb".into()),
            storage_capacity_bytes: std::env::var("STORAGE_CAPACITY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STORAGE_CAPACITY_BYTES),
            docs_root: std::env::var("DOCS_ROOT").unwrap_or_else(|_| "/brochures".into()),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "/Two-way-Radios".into()),
            admin_access_key: std::env::var("ADMIN_ACCESS_KEY").unwrap_or_else(|_| "vkt2026".into()),
        }
    }

    /// 持久存储文件完整路径
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.storage_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
