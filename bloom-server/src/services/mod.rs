//! 服务模块 - 外部协作者
//!
//! - [`mailer`] - 邮件通知 (尽力而为，失败不影响请求结果)
//! - [`image_store`] - 灵感图片存储 (压缩、去重、公开 URL)

pub mod image_store;
pub mod mailer;

pub use image_store::{ImageStore, StoredImage};
pub use mailer::{EmailMessage, LogMailer, MailClient, SmtpMailClient, build_mail_client};
