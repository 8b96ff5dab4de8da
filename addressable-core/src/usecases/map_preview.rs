use super::full_address::full_address;
use crate::{entities::*, gateways::country::CountryNameLookup};
use url::Url;

const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";
const MAP_LINK_URL: &str = "https://maps.google.com/maps";

/// Static map image of an address that links to the interactive map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPreview {
    pub address: String,
    pub width: u32,
    pub height: u32,
    pub image_url: Url,
    pub link_url: Url,
}

pub fn map_preview<C>(
    address: &Address,
    countries: &C,
    width: u32,
    height: u32,
) -> Option<MapPreview>
where
    C: CountryNameLookup + ?Sized,
{
    let query = full_address(address, countries);
    if query.is_empty() {
        return None;
    }
    let size = format!("{width}x{height}");
    let image_url = Url::parse_with_params(
        STATIC_MAP_URL,
        &[("size", size.as_str()), ("markers", query.as_str())],
    );
    let link_url = Url::parse_with_params(MAP_LINK_URL, &[("q", query.as_str())]);
    match (image_url, link_url) {
        (Ok(image_url), Ok(link_url)) => Some(MapPreview {
            address: query,
            width,
            height,
            image_url,
            link_url,
        }),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("Unable to create map preview URL: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::country::IsoCountries;
    use addressable_entities::builders::*;

    #[test]
    fn preview_urls_contain_the_encoded_address() {
        let a = Address::build()
            .line1("221B Baker St")
            .city("London")
            .country("GB")
            .finish();
        let preview = map_preview(&a, &IsoCountries, 300, 200).unwrap();
        assert_eq!(preview.address, "221B Baker St, London, United Kingdom");
        assert_eq!(
            preview.image_url.as_str(),
            "https://maps.googleapis.com/maps/api/staticmap?size=300x200&markers=221B+Baker+St%2C+London%2C+United+Kingdom"
        );
        assert_eq!(
            preview.link_url.as_str(),
            "https://maps.google.com/maps?q=221B+Baker+St%2C+London%2C+United+Kingdom"
        );
    }

    #[test]
    fn no_preview_without_address() {
        assert!(map_preview(&Address::default(), &IsoCountries, 300, 200).is_none());
    }
}
