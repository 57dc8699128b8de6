use crate::config::save::save_settings;
use crate::config::types::{CollisionPolicy, Config, DiscoveryOrder};
use crate::menu::handlers::{run_capture_organizer, run_suffix_copier};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 拍攝檔案整理工具 ===").cyan().bold());
    println!("{}", style("(按 ESC 離開)").dim());

    let options = vec![
        "依拍攝時間整理（PXL_ 檔案）",
        "加上後綴複製（P*.JPG 檔案）",
        "設定",
        "離開",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_capture_organizer(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(1) => {
            run_suffix_copier(term, shutdown_signal, config)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false),
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    loop {
        term.clear_screen()?;

        println!("{}", style("=== 設定 ===").cyan().bold());
        println!("{}", style("(按 ESC 返回)").dim());

        let options = vec![
            format!("檔案處理順序（目前：{}）", config.settings.discovery_order),
            format!("目標檔案已存在時（目前：{}）", config.settings.collision_policy),
            "返回".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("請選擇要修改的設定")
            .items(&options)
            .default(0)
            .interact_on_opt(term)?;

        match selection {
            Some(0) => {
                let orders = [DiscoveryOrder::FileSystem, DiscoveryOrder::Lexicographic];
                if let Some(order) = choose(
                    term,
                    "請選擇檔案處理順序",
                    &orders,
                    config.settings.discovery_order,
                )? {
                    config.settings.discovery_order = order;
                    persist(config, order)?;
                }
            }
            Some(1) => {
                let policies = [CollisionPolicy::Overwrite, CollisionPolicy::Skip];
                if let Some(policy) = choose(
                    term,
                    "請選擇目標檔案已存在時的處理方式",
                    &policies,
                    config.settings.collision_policy,
                )? {
                    config.settings.collision_policy = policy;
                    persist(config, policy)?;
                }
            }
            Some(2) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// 顯示選項並回傳與目前不同的新值；ESC 或未變更時回傳 `None`
fn choose<T>(term: &Term, prompt: &str, values: &[T], current: T) -> Result<Option<T>>
where
    T: Copy + PartialEq + Display,
{
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    let default_index = values.iter().position(|&v| v == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    Ok(selection
        .map(|index| values[index])
        .filter(|&value| value != current))
}

fn persist(config: &Config, changed: impl Display) -> Result<()> {
    save_settings(&config.settings)?;
    println!("\n{} {}", style("設定已儲存:").green(), changed);
    std::thread::sleep(std::time::Duration::from_secs(1));
    Ok(())
}
