use super::super::CliError;
use crate::services::RedirectResolver;
use crate::storages::LinkStore;
use crate::utils::colors::*;
use std::sync::Arc;

/// 解析短链接并输出跳转目标
///
/// 接受完整地址（`<base>/#/<alias>`）或纯别名；命中时作为副作用记录一次
/// 点击，并把目标 URL 打印给调用方完成最终跳转。
pub fn resolve_link(store: Arc<dyn LinkStore>, address: String) -> Result<(), CliError> {
    let alias = RedirectResolver::extract_alias(&address).unwrap_or(address.as_str());

    let resolver = RedirectResolver::new(store);
    match resolver.resolve(alias) {
        Some(target) => {
            println!(
                "{}{}✓{} {}{}{} -> {}{}{}",
                BOLD, GREEN, RESET, CYAN, alias, RESET, BLUE, target, RESET
            );
            Ok(())
        }
        None => Err(CliError::CommandError(format!("短链接不存在: {}", alias))),
    }
}
