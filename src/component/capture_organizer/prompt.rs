//! 互動提問模組
//!
//! 以 `Ask` 抽象提問能力，核心邏輯只接收已收集好的值；
//! 終端機使用 dialoguer，測試可直接傳入閉包

use super::gate::is_affirmative;
use crate::tools::{AdjustmentSpec, Direction};
use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

/// 時間校正方向選項（索引 1 為減少）
pub const DIRECTION_ITEMS: [&str; 2] = ["add", "reduce"];

/// 提問能力
pub trait Ask {
    /// 提出問題並取得文字回答（可為空字串）
    fn ask(&mut self, question: &str) -> Result<String>;

    /// 是非題，只有明確同意才回傳 `true`
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(question)?))
    }

    /// 選擇題，回答不符任何選項時使用預設值
    fn select(&mut self, question: &str, items: &[&str], default: usize) -> Result<usize> {
        let answer = self.ask(question)?;
        let answer = answer.trim();
        Ok(items
            .iter()
            .position(|item| item.eq_ignore_ascii_case(answer))
            .unwrap_or(default))
    }
}

impl<F> Ask for F
where
    F: FnMut(&str) -> Result<String>,
{
    fn ask(&mut self, question: &str) -> Result<String> {
        (*self)(question)
    }
}

/// 終端機互動
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerAsk;

impl Ask for DialoguerAsk {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    fn select(&mut self, question: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }
}

/// 解析非負整數，允許開頭的 `+`，只取開頭的數字
///
/// 沒有數字時視為 0，超出範圍時取 `u64::MAX`
#[must_use]
pub fn parse_count(answer: &str) -> u64 {
    let answer = answer.trim();
    let answer = answer.strip_prefix('+').unwrap_or(answer);
    let digits_end = answer
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(answer.len());

    let digits = &answer[..digits_end];
    if digits.is_empty() {
        return 0;
    }
    // 全為 ASCII 數字，解析失敗只可能是溢位
    digits.parse().unwrap_or(u64::MAX)
}

/// 詢問是否校正時間，以及方向與時、分、秒
pub fn collect_adjustment(ask: &mut dyn Ask) -> Result<Option<AdjustmentSpec>> {
    if !ask.confirm("是否要校正檔案時間？(yes/no)")? {
        return Ok(None);
    }

    let direction = match ask.select("要增加還是減少時間？(add/reduce)", &DIRECTION_ITEMS, 0)? {
        1 => Direction::Reduce,
        _ => Direction::Add,
    };

    let hours = parse_count(&ask.ask("請輸入要調整的小時數（0 表示不調整）")?);
    let minutes = parse_count(&ask.ask("請輸入要調整的分鐘數（0 表示不調整）")?);
    let seconds = parse_count(&ask.ask("請輸入要調整的秒數（0 表示不調整）")?);

    Ok(Some(AdjustmentSpec {
        direction,
        hours,
        minutes,
        seconds,
    }))
}
