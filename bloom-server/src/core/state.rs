use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{ImageStore, MailClient, build_mail_client};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是平台后端的核心数据结构，使用 Arc/连接池实现浅拷贝，
/// 克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | mailer | Arc<dyn MailClient> | 邮件通知服务 (尽力而为) |
/// | images | ImageStore | 灵感图片存储 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// 邮件通知服务
    pub mailer: Arc<dyn MailClient>,
    /// 图片存储服务
    pub images: ImageStore,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试场景直接构造。
    pub fn new(
        config: Config,
        pool: SqlitePool,
        mailer: Arc<dyn MailClient>,
        images: ImageStore,
    ) -> Self {
        Self {
            config,
            pool,
            mailer,
            images,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database/bloom.db, 自动迁移)
    /// 3. 邮件服务 (SMTP 配置缺省时降级为日志记录)
    /// 4. 图片存储 (work_dir/uploads/images)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_path();
        let db = DbService::new(&db_path.to_string_lossy()).await?;

        let mailer = build_mail_client(config);
        let images = ImageStore::new(config.images_dir());

        Ok(Self::new(config.clone(), db.pool, mailer, images))
    }
}
