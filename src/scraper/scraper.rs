// scraper.rs
use crate::config::ScrapeConfig;
use crate::scraper::selectors::ListingSelectors;
use crate::scraper::{Listing, ScraperError, NOT_AVAILABLE};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, REFERER};
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Origin prefixed onto site-relative hrefs.
const SITE_ORIGIN: &str = "https://www.olx.in";

pub struct OlxScraper {
    client: Client,
    selectors: ListingSelectors,
    config: ScrapeConfig,
}

/// Listings accumulated by a run, plus how many pages actually parsed.
pub struct ScrapeOutcome {
    pub listings: Vec<Listing>,
    pub pages_fetched: usize,
}

impl OlxScraper {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(REFERER, HeaderValue::from_static("https://www.olx.in/"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            selectors: ListingSelectors::for_olx()?,
            config,
        })
    }

    /// Walks search-result pages in order, accumulating listings.
    ///
    /// Stops on the first transport/status failure, or on the first page
    /// with no listing containers (end of results, or the site layout
    /// changed). Whatever was collected before the stop is always returned.
    pub fn scrape(&self) -> ScrapeOutcome {
        let mut listings = Vec::new();
        let mut pages_fetched = 0;

        for page in 1..=self.config.max_pages {
            let page_url = self.page_url(page);
            eprintln!("📄 Scraping page {page}: {page_url}");

            let html = match self.fetch_page(page, &page_url) {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("❌ {e}");
                    break;
                }
            };

            let found = self.extract_listings(&html);
            pages_fetched += 1;

            if found.is_empty() {
                eprintln!(
                    "🏁 No listings found on page {page}. The page structure might have changed."
                );
                break;
            }

            eprintln!("✅ Page {page} parsed ({} listings)", found.len());
            listings.extend(found);

            // Courtesy pause toward the site; no retry semantics attached
            if page < self.config.max_pages {
                std::thread::sleep(self.random_delay());
            }
        }

        ScrapeOutcome {
            listings,
            pages_fetched,
        }
    }

    /// Page 1 is the base URL verbatim; later pages carry a page parameter.
    fn page_url(&self, page: usize) -> String {
        if page == 1 {
            self.config.base_url.clone()
        } else {
            format!("{}?page={page}", self.config.base_url)
        }
    }

    fn fetch_page(&self, page: usize, url: &str) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() != 200 {
            return Err(ScraperError::Status {
                page,
                code: status.as_u16(),
            });
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }

    /// Pulls every listing out of one page of markup.
    ///
    /// Extraction is best-effort per field: a missing sub-element becomes
    /// the "N/A" sentinel rather than dropping the whole listing.
    pub fn extract_listings(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_document(html);
        let mut listings = Vec::new();

        for item in document.select(&self.selectors.container) {
            listings.push(Listing {
                title: text_or_na(item, &self.selectors.title),
                price: text_or_na(item, &self.selectors.price),
                location: text_or_na(item, &self.selectors.location),
                date_posted: text_or_na(item, &self.selectors.date_posted),
                url: self.link_or_na(item),
            });
        }

        listings
    }

    fn link_or_na(&self, item: ElementRef) -> String {
        item.select(&self.selectors.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| {
                if href.starts_with('/') {
                    format!("{SITE_ORIGIN}{href}")
                } else {
                    href.to_string()
                }
            })
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    fn random_delay(&self) -> Duration {
        let min = self.config.min_delay.as_secs_f64();
        let max = self.config.max_delay.as_secs_f64();
        Duration::from_secs_f64(rand::thread_rng().gen_range(min..=max))
    }
}

fn text_or_na(item: ElementRef, selector: &Selector) -> String {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const PAGE_WITH_LISTING: &str = r#"
        <html><body><ul>
          <li class="EIR5N">
            <a href="/item/waterproof-car-cover-123">
              <span class="fTZT3">  Waterproof car cover  </span>
            </a>
            <span class="_2Ks63">₹ 1,299</span>
            <span class="_1KOFM">Mumbai, Maharashtra</span>
            <span class="_2DGqt">2 days ago</span>
          </li>
        </ul></body></html>
    "#;

    fn test_scraper(base_url: &str) -> OlxScraper {
        OlxScraper::new(ScrapeConfig {
            base_url: base_url.to_string(),
            max_pages: 3,
            min_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(1),
            timeout: Duration::from_secs(5),
        })
        .expect("scraper init")
    }

    /// Serves the given (status, body) responses one connection at a time,
    /// counting how many requests actually arrive.
    fn spawn_stub_server(responses: Vec<(u16, String)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in_thread = Arc::clone(&hits);

        std::thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                hits_in_thread.fetch_add(1, Ordering::SeqCst);

                // Drain the request head before answering
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);

                let reason = if status == 200 { "OK" } else { "Error" };
                let resp = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });

        (format!("http://{addr}/items/q-car-cover"), hits)
    }

    #[test]
    fn page_one_url_is_base_verbatim() {
        let scraper = test_scraper("https://www.olx.in/items/q-car-cover");
        assert_eq!(scraper.page_url(1), "https://www.olx.in/items/q-car-cover");
    }

    #[test]
    fn later_pages_append_page_parameter() {
        let scraper = test_scraper("https://www.olx.in/items/q-car-cover");
        assert_eq!(
            scraper.page_url(2),
            "https://www.olx.in/items/q-car-cover?page=2"
        );
    }

    #[test]
    fn extracts_all_five_fields_trimmed() {
        let scraper = test_scraper("http://unused");
        let listings = scraper.extract_listings(PAGE_WITH_LISTING);

        assert_eq!(listings.len(), 1);
        let l = &listings[0];
        assert_eq!(l.title, "Waterproof car cover");
        assert_eq!(l.price, "₹ 1,299");
        assert_eq!(l.location, "Mumbai, Maharashtra");
        assert_eq!(l.date_posted, "2 days ago");
        assert_eq!(l.url, "https://www.olx.in/item/waterproof-car-cover-123");
    }

    #[test]
    fn missing_sub_elements_become_sentinels() {
        let html = r#"
            <li class="EIR5N">
              <span class="fTZT3">Bare-bones cover</span>
            </li>
        "#;
        let scraper = test_scraper("http://unused");
        let listings = scraper.extract_listings(html);

        assert_eq!(listings.len(), 1);
        let l = &listings[0];
        assert_eq!(l.title, "Bare-bones cover");
        assert_eq!(l.price, "N/A");
        assert_eq!(l.location, "N/A");
        assert_eq!(l.date_posted, "N/A");
        assert_eq!(l.url, "N/A");
    }

    #[test]
    fn anchor_without_href_yields_sentinel_url() {
        let html = r#"
            <li class="EIR5N">
              <a><span class="fTZT3">No link here</span></a>
            </li>
        "#;
        let scraper = test_scraper("http://unused");
        let listings = scraper.extract_listings(html);

        assert_eq!(listings[0].url, "N/A");
    }

    #[test]
    fn absolute_href_is_kept_verbatim() {
        let html = r#"
            <li class="EIR5N">
              <a href="https://example.com/elsewhere">x</a>
            </li>
        "#;
        let scraper = test_scraper("http://unused");
        let listings = scraper.extract_listings(html);

        assert_eq!(listings[0].url, "https://example.com/elsewhere");
    }

    #[test]
    fn page_without_containers_yields_empty() {
        let html = "<html><body><div class=\"something-else\">no ads</div></body></html>";
        let scraper = test_scraper("http://unused");
        assert!(scraper.extract_listings(html).is_empty());
    }

    #[test]
    fn non_200_halts_loop_and_keeps_prior_pages() {
        // Page 1 succeeds, page 2 fails; page 3 must never be requested.
        let (base_url, hits) = spawn_stub_server(vec![
            (200, PAGE_WITH_LISTING.to_string()),
            (500, String::new()),
            (200, PAGE_WITH_LISTING.to_string()),
        ]);

        let scraper = test_scraper(&base_url);
        let outcome = scraper.scrape();

        assert_eq!(outcome.listings.len(), 1);
        assert_eq!(outcome.pages_fetched, 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_page_stops_loop_cleanly() {
        let (base_url, hits) = spawn_stub_server(vec![
            (200, "<html><body>no listings</body></html>".to_string()),
            (200, PAGE_WITH_LISTING.to_string()),
        ]);

        let scraper = test_scraper(&base_url);
        let outcome = scraper.scrape();

        assert!(outcome.listings.is_empty());
        assert_eq!(outcome.pages_fetched, 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
