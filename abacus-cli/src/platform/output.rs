//! CLI 格式化输出
//!
//! Token lists and errors in text or JSON form.

use abacus_api::{AbacusError, OutputFormat, RunConfig, TokenOutput};

/// Render a token list in the configured format
pub fn render_tokens(output: &TokenOutput, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(output.to_string()),
        OutputFormat::Json => output.to_json(),
    }
}

/// Render an error: the message, then the underlined source when enabled
pub fn render_error(e: &AbacusError, config: &RunConfig) -> String {
    match config.output {
        OutputFormat::Json => {
            let report = e.to_report(config.show_arrows);
            report.to_json().unwrap_or_else(|_| report.to_string())
        }
        OutputFormat::Text => match e {
            AbacusError::Lexer(scan) if config.show_arrows => {
                format!("{}\n\n{}", scan, scan.context())
            }
            _ => e.to_string(),
        },
    }
}

/// 打印错误并显示源代码上下文
pub fn print_error(e: &AbacusError, config: &RunConfig) {
    eprintln!("{}", render_error(e, config));
}
