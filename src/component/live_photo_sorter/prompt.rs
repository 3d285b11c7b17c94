use anyhow::Result;
use dialoguer::Confirm;

/// 批次刪除前的確認，整批只問一次
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> Result<bool>;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> Result<bool>,
{
    fn confirm(&self, message: &str) -> Result<bool> {
        self(message)
    }
}

/// 終端機互動確認，預設為否
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        Ok(confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_prompt_receives_message() {
        let prompt = |message: &str| -> Result<bool> { Ok(message.contains("刪除")) };

        assert!(prompt.confirm("確定要刪除嗎？").unwrap());
        assert!(!ConfirmPrompt::confirm(&prompt, "移動").unwrap());
    }
}
