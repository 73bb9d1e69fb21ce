use serde::Deserialize;

// built from raw query pairs: the first `page` wins, anything but a positive integer is page 1
#[derive(Deserialize, Debug, PartialEq)]
#[serde(from = "Vec<(String, String)>")]
pub struct PageParam(pub usize);

impl From<Vec<(String, String)>> for PageParam {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        PageParam(page)
    }
}
