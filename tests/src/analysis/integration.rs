use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use azfd_common::config::ProbeConfig;
use azfd_common::http::{HttpResponse, HttpTransport, TransportError};
use azfd_common::result::{self, ScanResult, Status};
use azfd_core::{report, DomainAnalyzer};

use crate::support::{analyzer, target, FakeResolver, FakeTransport};

const SUFFIX_CNAME: &str = "foo-ab123456789.azurefd.net";
const PLAIN_CNAME: &str = "customendpoint.azurefd.net";

const FRONT_DOOR_404: &str = r#"<!DOCTYPE html><html><head><title>Error 404</title></head>
<body><h2>Our services aren't available right now</h2>
<p>We're working to restore all services as soon as possible. Azure Front Door</p></body></html>"#;

#[tokio::test]
async fn domain_without_cname_is_safe() {
    let resolver = Arc::new(FakeResolver::default());
    let transport = Arc::new(FakeTransport::default());
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("www.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "No CNAME found");
    assert_eq!(res.cname, "");
    assert!(transport.requests().is_empty(), "no probe expected");
}

#[tokio::test]
async fn failed_lookup_folds_into_no_cname() {
    let resolver = Arc::new(FakeResolver::default().failing("www.example.com", "SERVFAIL"));
    let analyzer = analyzer(resolver, Arc::new(FakeTransport::default()));

    let res = analyzer.analyze(&target("www.example.com")).await;

    assert_eq!(res, ScanResult {
        domain: "www.example.com".into(),
        cname: String::new(),
        status: Status::Safe,
        notes: "No CNAME found".into(),
    });
}

#[tokio::test]
async fn empty_alias_counts_as_no_cname() {
    let resolver = Arc::new(FakeResolver::default().alias("www.example.com", ""));
    let transport = Arc::new(FakeTransport::default());
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("www.example.com")).await;

    assert_eq!(res.notes, "No CNAME found");
    assert_eq!(res.cname, "");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn cname_outside_front_door_is_safe() {
    let resolver = Arc::new(FakeResolver::default().alias("blog.example.com", "example.github.io"));
    let transport = Arc::new(FakeTransport::default());
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("blog.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "Not AzureFD endpoint");
    assert_eq!(res.cname, "example.github.io");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn suffix_without_verification_is_vulnerable() {
    let resolver = Arc::new(FakeResolver::default().alias("shop.example.com", SUFFIX_CNAME));
    let transport = Arc::new(FakeTransport::default().page("http://shop.example.com/", "<h1>Shop</h1>"));
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("shop.example.com")).await;

    assert_eq!(res.status, Status::Vulnerable);
    assert_eq!(
        res.notes,
        "Suffix present, custom domain verification missing → bypass possible"
    );
    assert_eq!(res.cname, SUFFIX_CNAME);
    assert_eq!(transport.requests(), vec!["http://shop.example.com/"]);
}

#[tokio::test]
async fn suffix_with_verification_header_is_safe() {
    let resolver = Arc::new(FakeResolver::default().alias("shop.example.com", SUFFIX_CNAME));
    let transport = Arc::new(
        FakeTransport::default().header("http://shop.example.com/", "X-AzureFD-Verification"),
    );
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("shop.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "Suffix present, verification enabled");
}

#[tokio::test]
async fn suffix_with_unreachable_domain_is_not_flagged() {
    let resolver = Arc::new(FakeResolver::default().alias("shop.example.com", SUFFIX_CNAME));
    let transport = Arc::new(FakeTransport::default());
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("shop.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "Suffix present, verification enabled");
    assert_eq!(transport.requests(), vec!["http://shop.example.com/"]);
}

#[tokio::test]
async fn plain_endpoint_with_default_page_is_dangling() {
    let resolver = Arc::new(FakeResolver::default().alias("cdn.example.com", PLAIN_CNAME));
    let transport = Arc::new(
        FakeTransport::default().page("https://customendpoint.azurefd.net/", FRONT_DOOR_404),
    );
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("cdn.example.com")).await;

    assert_eq!(res.status, Status::Vulnerable);
    assert_eq!(res.notes, "No suffix, default AzureFD error → dangling endpoint");
    assert_eq!(transport.requests(), vec!["https://customendpoint.azurefd.net/"]);
}

#[tokio::test]
async fn plain_endpoint_serving_content_is_safe() {
    let resolver = Arc::new(FakeResolver::default().alias("cdn.example.com", PLAIN_CNAME));
    let transport = Arc::new(
        FakeTransport::default().page("https://customendpoint.azurefd.net/", "<h1>Contoso</h1>"),
    );
    let analyzer = analyzer(resolver, transport);

    let res = analyzer.analyze(&target("cdn.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "No suffix, endpoint active");
}

#[tokio::test]
async fn unreachable_plain_endpoint_counts_as_active() {
    let resolver = Arc::new(FakeResolver::default().alias("cdn.example.com", PLAIN_CNAME));
    let transport = Arc::new(FakeTransport::default());
    let analyzer = analyzer(resolver, transport.clone());

    let res = analyzer.analyze(&target("cdn.example.com")).await;

    assert_eq!(res.status, Status::Safe);
    assert_eq!(res.notes, "No suffix, endpoint active");
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn raw_target_reaches_the_resolver_untouched() {
    let resolver = Arc::new(FakeResolver::default());
    let analyzer = analyzer(resolver.clone(), Arc::new(FakeTransport::default()));

    let res = analyzer.analyze(&target("  CDN.Example.com. ")).await;

    assert_eq!(res.domain, "CDN.Example.com.");
    assert_eq!(*resolver.lookups.lock().unwrap(), vec!["CDN.Example.com."]);
}

#[tokio::test]
async fn analysis_is_reproducible() {
    let resolver = Arc::new(FakeResolver::default().alias("cdn.example.com", PLAIN_CNAME));
    let transport = Arc::new(
        FakeTransport::default().page("https://customendpoint.azurefd.net/", FRONT_DOOR_404),
    );
    let analyzer = analyzer(resolver, transport);

    let first = analyzer.analyze(&target("cdn.example.com")).await;
    let second = analyzer.analyze(&target("cdn.example.com")).await;

    assert_eq!(first, second);
}

/// Answers every URL with an active page, the first target slowest.
struct StaggeredTransport;

#[async_trait]
impl HttpTransport for StaggeredTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let delay = if url.contains("ep0.") { 150 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "ok".into(),
        })
    }
}

#[tokio::test]
async fn batch_keeps_input_order() {
    let mut resolver = FakeResolver::default();
    let mut targets = Vec::new();
    for i in 0..6 {
        let domain = format!("site{i}.example.com");
        resolver = resolver.alias(&domain, &format!("ep{i}.azurefd.net"));
        targets.push(target(&domain));
    }
    let probe = ProbeConfig {
        concurrency: 4,
        ..ProbeConfig::default()
    };
    let analyzer = DomainAnalyzer::new(Arc::new(resolver), Arc::new(StaggeredTransport), &probe);

    let finished = AtomicUsize::new(0);
    let on_progress: &(dyn Fn(usize) + Send + Sync) = &|count: usize| {
        finished.fetch_max(count, Ordering::Relaxed);
    };
    let results = analyzer.analyze_all(&targets, Some(on_progress)).await;

    let domains: Vec<&str> = results.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(
        domains,
        vec![
            "site0.example.com",
            "site1.example.com",
            "site2.example.com",
            "site3.example.com",
            "site4.example.com",
            "site5.example.com",
        ]
    );
    assert_eq!(finished.load(Ordering::Relaxed), 6);
    assert!(results.iter().all(|r| r.notes == "No suffix, endpoint active"));
}

#[tokio::test]
async fn vuln_only_and_json_on_a_mixed_batch() {
    let resolver = FakeResolver::default()
        .alias("a.example.com", PLAIN_CNAME)
        .alias("b.example.com", "b.example.net")
        .alias("c.example.com", SUFFIX_CNAME);
    let transport = FakeTransport::default()
        .page("https://customendpoint.azurefd.net/", FRONT_DOOR_404)
        .page("http://c.example.com/", "welcome");
    let analyzer = analyzer(Arc::new(resolver), Arc::new(transport));

    let targets = vec![target("a.example.com"), target("b.example.com"), target("c.example.com")];
    let results = analyzer.analyze_all(&targets, None).await;
    let vulnerable = result::vulnerable_only(results.clone());

    assert_eq!(results.len(), 3);
    let domains: Vec<&str> = vulnerable.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains, vec!["a.example.com", "c.example.com"]);

    let json = report::render_json(&vulnerable).unwrap();
    let parsed: Vec<ScanResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vulnerable);
}
