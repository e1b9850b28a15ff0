use std::path::PathBuf;

use crate::{
    config::{Config, Style},
    driver::run_file,
    util::testing::{init_logger, root_dir},
};


fn case_file(case: &str) -> PathBuf {
    root_dir()
        .join("src/driver/tests/cases")
        .join(format!("{}.toml", case))
}

fn run_case(case: &str, style: Option<Style>, config: &Config) -> Result<String, String> {
    init_logger();
    run_file(&case_file(case), style, config).map_err(|err| err.to_string())
}

fn expect(case: &str, style: Style, expect: &str) {
    match run_case(case, Some(style), &Config::default()) {
        Ok(out) => assert_eq!(expect, out),
        Err(err) => panic!("expected no error, got: {}", err),
    }
}

fn expect_error(case: &str, config: &Config, error: &str) {
    match run_case(case, None, config) {
        Ok(out) => panic!("expected error, got: {}", out),
        Err(err) => assert_eq!(error, err),
    }
}
