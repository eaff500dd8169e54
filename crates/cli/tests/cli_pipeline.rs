use std::time::Duration;

use serde_json::{Value, json};

use storefront_cli::app;
use storefront_cli::console::ConsoleReporter;
use storefront_infra::PipelineConfig;

struct Captured {
    ok: bool,
    stdout: String,
    stderr: String,
}

impl Captured {
    /// The JSON document between the banner lines.
    fn body(&self) -> Value {
        let text = if self.ok { &self.stdout } else { &self.stderr };
        let start = text.find('{').expect("no json body");
        let end = text.rfind('}').expect("no json body");
        serde_json::from_str(&text[start..=end]).expect("body is not json")
    }
}

async fn run_cli(config: &PipelineConfig, args: &[&str]) -> Captured {
    let reporter = ConsoleReporter::new(config.program_name.clone(), Vec::new(), Vec::new());
    let outcome = app::run(config, args.iter().map(|s| s.to_string()), &reporter).await;
    let (out, err) = reporter.into_parts();
    Captured {
        ok: outcome.is_ok(),
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

fn round2(v: &Value) -> f64 {
    (v.as_f64().unwrap() * 100.0).round() / 100.0
}

#[tokio::test]
async fn valid_coupon_prints_discounted_page() {
    let captured = run_cli(&PipelineConfig::default(), &["123", "10OFF"]).await;

    assert!(captured.ok);
    assert!(captured.stderr.is_empty());
    assert!(captured.stdout.contains("====== storefront: SUCCESS Result:"));

    let body = captured.body();
    assert_eq!(body["product"], json!({ "id": "123", "name": "Magical T-Shirt" }));
    assert_eq!(body["coupon"], json!({ "code": "10OFF", "discount": 10.0 }));

    let prices: Vec<f64> = body["variants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| round2(&v["priceWithDiscount"]))
        .collect();
    assert_eq!(prices, vec![8.09, 9.89, 11.69]);
}

#[tokio::test]
async fn wrong_coupon_is_still_a_success() {
    let captured = run_cli(&PipelineConfig::default(), &["123", "WRONG"]).await;

    assert!(captured.ok);
    let body = captured.body();
    assert_eq!(body["coupon"], json!({ "code": "", "discount": 0.0 }));
    for variant in body["variants"].as_array().unwrap() {
        assert_eq!(variant["priceWithDiscount"], variant["price"]);
    }
}

#[tokio::test]
async fn unknown_product_prints_product_not_found() {
    let captured = run_cli(&PipelineConfig::default(), &["999", "10OFF"]).await;

    assert!(!captured.ok);
    assert!(captured.stdout.is_empty());
    assert_eq!(
        captured.body(),
        json!({ "error": "ProductNotFound", "message": "product not found: 999" })
    );
}

#[tokio::test]
async fn missing_coupon_code_is_a_validation_error() {
    let captured = run_cli(&PipelineConfig::default(), &["123"]).await;

    assert!(!captured.ok);
    assert_eq!(captured.body()["error"], json!("ValidationError"));
}

#[tokio::test]
async fn program_name_and_latency_come_from_config() {
    let config = PipelineConfig::default()
        .with_program_name("Effect")
        .with_store_latency(Duration::from_millis(10));

    let captured = run_cli(&config, &["123", "10OFF"]).await;
    assert!(captured.stdout.contains("====== Effect: SUCCESS Result:"));
}

#[cfg(unix)]
#[tokio::test]
async fn non_utf8_argument_reports_a_validation_failure() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let config = PipelineConfig::default();
    let reporter = ConsoleReporter::new("storefront", Vec::new(), Vec::new());
    let args = vec![OsString::from("123"), OsString::from_vec(vec![0xff, 0xfe])];

    let outcome = app::run(&config, args, &reporter).await;
    let (out, err) = reporter.into_parts();
    let captured = Captured {
        ok: outcome.is_ok(),
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    };

    assert!(!captured.ok);
    assert!(captured.stdout.is_empty());
    assert_eq!(
        captured.body(),
        json!({ "error": "ValidationError", "message": "validation failed: couponCode: required" })
    );
}
