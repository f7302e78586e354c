use super::super::CliError;
use crate::config::get_config;
use crate::services::registry::MIN_ALIAS_LENGTH;
use crate::services::{dashboard_stats, AliasGenerator, LinkRegistry};
use crate::storages::{LinkRecord, LinkStore};
use crate::utils::colors::*;
use crate::utils::url_validator::validate_url;
use crate::utils::normalize_alias;
use std::sync::Arc;

fn format_created_at(link: &LinkRecord) -> String {
    chrono::DateTime::from_timestamp_millis(link.created_at)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn short_url(alias: &str) -> String {
    format!("{}/#/{}", get_config().features.base_url, alias)
}

pub fn list_links(store: Arc<dyn LinkStore>) -> Result<(), CliError> {
    let registry = LinkRegistry::new(store);
    let links = registry.get_all();

    if links.is_empty() {
        println!("{}{}ℹ{} 没有短链接", BOLD, BLUE, RESET);
    } else {
        println!("{}{}短链接列表:{}", BOLD, GREEN, RESET);
        println!();
        for link in &links {
            println!(
                "  {}{}{} -> {}{}{} {}({} 次点击, 创建于 {}){}",
                CYAN, link.alias, RESET,
                BLUE, link.original_url, RESET,
                DIM, link.total_clicks, format_created_at(link), RESET
            );
            if !link.tags.is_empty() {
                println!("    {}标签: {}{}", DIM, link.tags.join(", "), RESET);
            }
        }
        println!();
        println!(
            "{}{}ℹ{} 共 {}{}{} 个短链接",
            BOLD, BLUE, RESET, GREEN, links.len(), RESET
        );
    }
    Ok(())
}

pub fn add_link(
    store: Arc<dyn LinkStore>,
    target_url: String,
    alias: Option<String>,
    tags: Vec<String>,
) -> Result<(), CliError> {
    // 验证 URL 格式
    validate_url(&target_url).map_err(|e| CliError::CommandError(e.message().to_string()))?;

    let registry = LinkRegistry::new(store);

    let final_alias = match alias {
        Some(alias) => {
            // 用户提供的别名在输入边界检查，注册表 create 不再重复校验
            let normalized = normalize_alias(&alias);
            if normalized.len() < MIN_ALIAS_LENGTH {
                return Err(CliError::CommandError(format!(
                    "别名太短，至少需要 {} 个字符: {}",
                    MIN_ALIAS_LENGTH, normalized
                )));
            }
            if registry.exists(&normalized) {
                return Err(CliError::CommandError(format!(
                    "别名 '{}' 已被占用",
                    normalized
                )));
            }
            normalized
        }
        None => {
            let alias = AliasGenerator::generate(&registry)
                .map_err(|e| CliError::CommandError(e.to_string()))?;
            println!(
                "{}{}ℹ{} 生成随机别名: {}{}{}",
                BOLD, BLUE, RESET, MAGENTA, alias, RESET
            );
            alias
        }
    };

    let link = registry
        .create(&target_url, &final_alias, tags)
        .map_err(|e| CliError::CommandError(format!("保存失败: {}", e)))?;

    println!(
        "{}{}✓{} 已添加短链接: {}{}{} -> {}{}{}",
        BOLD, GREEN, RESET,
        CYAN, short_url(&link.alias), RESET,
        BLUE, link.original_url, RESET
    );

    Ok(())
}

pub fn rename_link(
    store: Arc<dyn LinkStore>,
    alias: String,
    new_alias: String,
) -> Result<(), CliError> {
    let registry = LinkRegistry::new(store);

    let link = registry
        .find_by_alias(&alias)
        .ok_or_else(|| CliError::CommandError(format!("短链接不存在: {}", alias)))?;

    let renamed = registry
        .rename(&link.id, &new_alias)
        .map_err(|e| CliError::CommandError(e.message().to_string()))?;

    println!(
        "{}{}✓{} 已重命名: {}{}{} -> {}{}{}",
        BOLD, GREEN, RESET,
        CYAN, alias, RESET,
        CYAN, renamed.alias, RESET
    );

    Ok(())
}

pub fn remove_link(store: Arc<dyn LinkStore>, alias: String) -> Result<(), CliError> {
    let registry = LinkRegistry::new(store);

    let link = registry
        .find_by_alias(&alias)
        .ok_or_else(|| CliError::CommandError(format!("短链接不存在: {}", alias)))?;

    registry.delete(&link.id);

    crate::print_success!("已删除短链接: {}{}{}", CYAN, alias, RESET);

    Ok(())
}

pub fn clear_links(store: Arc<dyn LinkStore>) -> Result<(), CliError> {
    let registry = LinkRegistry::new(store);
    let count = registry.get_all().len();

    if count == 0 {
        crate::print_info!("没有需要清空的短链接");
        return Ok(());
    }

    registry.clear_all();

    crate::print_success!("已清空 {}{}{} 个短链接", GREEN, count, RESET);

    Ok(())
}

pub fn show_stats(store: Arc<dyn LinkStore>, alias: Option<String>) -> Result<(), CliError> {
    let registry = LinkRegistry::new(store);

    match alias {
        Some(alias) => {
            let link = registry
                .find_by_alias(&alias)
                .ok_or_else(|| CliError::CommandError(format!("短链接不存在: {}", alias)))?;

            println!(
                "{}{}{}{} -> {}{}{}",
                BOLD, CYAN, link.alias, RESET, BLUE, link.original_url, RESET
            );
            println!("  总点击: {}{}{}", GREEN, link.total_clicks, RESET);
            if link.click_history.is_empty() {
                println!("  {}最近 30 天没有点击记录{}", DIM, RESET);
            } else {
                println!("  每日点击:");
                for entry in &link.click_history {
                    println!("    {}{}{}  {}", DIM, entry.date, RESET, entry.count);
                }
            }
        }
        None => {
            let links = registry.get_all();
            let stats = dashboard_stats(&links);

            println!("{}{}统计总览:{}", BOLD, GREEN, RESET);
            println!("  链接总数: {}{}{}", GREEN, stats.total_links, RESET);
            println!("  点击总数: {}{}{}", GREEN, stats.total_clicks, RESET);
            if let Some(top) = stats.top_performer {
                println!(
                    "  最热链接: {}{}{} ({} 次点击)",
                    CYAN, top.alias, RESET, top.total_clicks
                );
            }
        }
    }

    Ok(())
}
