use super::*;

#[test]
fn robots_for_production_site() {
    let site = SiteConfig { url: "https://www.modelwef.com".to_owned(), host: "www.modelwef.com".to_owned() };
    assert_eq!(
        robots_body(&site),
        "User-agent: *\n\
         Allow: /\n\
         Disallow: /admin\n\
         Disallow: /dashboard\n\
         Disallow: /login\n\
         Disallow: /forgot-password\n\
         Disallow: /reset-password\n\
         \n\
         Sitemap: https://www.modelwef.com/sitemap.xml\n\
         Host: www.modelwef.com\n"
    );
}

#[test]
fn robots_follows_configured_site() {
    let site = SiteConfig { url: "http://localhost:3000".to_owned(), host: "localhost:3000".to_owned() };
    let body = robots_body(&site);
    assert!(body.contains("Sitemap: http://localhost:3000/sitemap.xml\n"));
    assert!(body.ends_with("Host: localhost:3000\n"));
}
