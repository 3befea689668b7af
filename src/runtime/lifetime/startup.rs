use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage()?;
    warn!("In-memory storage initialized, data resets on restart");

    // 输出种子数据概况
    let courses = storage.list_courses().await?;
    debug!("Course registry seeded with {} courses", courses.len());

    Ok(StartupContext { storage })
}
