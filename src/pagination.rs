use serde::Deserialize;

/// `?page=N` query string; anything missing or non-numeric means the first page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

/// LIMIT / OFFSET for a 1-based page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    pub fn new(page: i64, per_page: i64) -> Self {
        let per_page = per_page.max(1);
        let page = page.max(1);
        Self {
            limit: per_page,
            offset: (page - 1).saturating_mul(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
        }
    }

    #[test]
    fn parses_page_number() {
        assert_eq!(query(None).page(), 1);
        assert_eq!(query(Some("3")).page(), 3);
        assert_eq!(query(Some("abc")).page(), 1);
        assert_eq!(query(Some("0")).page(), 1);
        assert_eq!(query(Some("-2")).page(), 1);
    }

    #[test]
    fn computes_offsets() {
        assert_eq!(Page::new(1, 10), Page { limit: 10, offset: 0 });
        assert_eq!(Page::new(3, 10), Page { limit: 10, offset: 20 });
        assert_eq!(Page::new(2, 0), Page { limit: 1, offset: 1 });
    }
}
