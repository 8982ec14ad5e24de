//! Catalog Engine - 通信设备经销商的产品目录解析引擎
//!
//! # 架构概述
//!
//! 分层目录数据模型，提供以下核心功能：
//!
//! - **目录合并** (`catalog`): 静态种子目录 + 本地自定义记录的合并视图
//! - **持久存储** (`db`): 嵌入式 redb 键值存储，带容量上限
//! - **派生索引** (`index`): 位置索引（id → 层级地址）与搜索索引
//! - **详情解析** (`services/detail`): 覆盖 > 精选 > 兜底 三级优先
//! - **管理入口** (`services/admin`): 唯一写入方，写后全量失效重建
//!
//! # 模块结构
//!
//! ```text
//! catalog-engine/src/
//! ├── core/          # 配置
//! ├── utils/         # 错误、日志、校验
//! ├── slug.rs        # slug 编码（全局唯一的 id 派生规则）
//! ├── db/            # 存储层 + 模型 + 仓储
//! ├── catalog/       # 种子数据、精选详情、合并
//! ├── index/         # 位置/搜索索引
//! ├── services/      # 引擎门面与各边界
//! └── routes.rs      # hash 路由表面
//! ```
//!
//! Execution is single-threaded and synchronous. Derived indices are
//! memoized per catalog generation and rebuilt whole after every write,
//! never patched incrementally.

pub mod catalog;
pub mod core;
pub mod db;
pub mod index;
pub mod routes;
pub mod services;
pub mod slug;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use db::models::{
    Catalog, Category, CustomProduct, CustomProductSubmission, ProductDetails, ProductLocation,
    ProductSearchResult, Section, Subsection, UserSession,
};
pub use index::{SearchFilters, SortOption};
pub use routes::Route;
pub use services::{AdminService, AssistantTools, AuthService, CatalogService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
