/// 服务器配置 - 平台后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/bloom | 工作目录 (数据库、上传文件、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | BASE_URL | http://localhost:3000 | 客户端登录链接的基础地址 |
/// | ENVIRONMENT | development | 运行环境 |
/// | SMTP_HOST / SMTP_PORT / SMTP_USERNAME / SMTP_PASSWORD | - | SMTP 配置 (缺省时邮件仅记录日志) |
/// | MAIL_FROM | no-reply@bloom.local | 发件人地址 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/bloom HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、上传图片、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 客户端登录链接的基础地址
    pub base_url: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 发件人地址
    pub mail_from: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/bloom".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "no-reply@bloom.local".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir)
            .join("database")
            .join("bloom.db")
    }

    /// 上传图片目录
    pub fn images_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("uploads/images")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(std::path::Path::new(&self.work_dir).join("database"))?;
        std::fs::create_dir_all(self.images_dir())?;
        Ok(())
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
