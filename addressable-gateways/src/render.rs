use addressable_core::{
    entities::Address,
    gateways::country::CountryNameLookup,
    usecases::{address_lines, AddressLayout, AddressLayoutTable, MapPreview},
};
use anyhow::Result;
use askama::Template;

#[derive(Template)]
#[template(path = "address.html")]
struct AddressTemplate<'a> {
    lines: &'a [String],
}

#[derive(Template)]
#[template(path = "address_map.html")]
struct AddressMapTemplate<'a> {
    address: &'a str,
    link_url: &'a str,
    image_url: &'a str,
    width: u32,
    height: u32,
}

pub fn address_html<C>(address: &Address, countries: &C, layout: AddressLayout) -> Result<String>
where
    C: CountryNameLookup + ?Sized,
{
    let lines = address_lines(address, countries, layout);
    Ok(AddressTemplate { lines: &lines }.render()?)
}

/// Renders the address with the layout of its country.
pub fn localised_address_html<C>(
    address: &Address,
    countries: &C,
    layouts: &AddressLayoutTable,
) -> Result<String>
where
    C: CountryNameLookup + ?Sized,
{
    let layout = layouts.layout_for(address.country.as_deref());
    address_html(address, countries, layout)
}

pub fn address_map_html(preview: &MapPreview) -> Result<String> {
    let html = AddressMapTemplate {
        address: &preview.address,
        link_url: preview.link_url.as_str(),
        image_url: preview.image_url.as_str(),
        width: preview.width,
        height: preview.height,
    }
    .render()?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use addressable_core::{gateways::country::IsoCountries, usecases::map_preview};
    use addressable_entities::builders::*;
    use pretty_assertions::assert_eq;

    fn stuttgart() -> Address {
        Address::build()
            .line1("Hauptstr. 1")
            .city("Stuttgart")
            .postcode("70173")
            .country("DE")
            .finish()
    }

    #[test]
    fn render_localised_address() {
        let html =
            localised_address_html(&stuttgart(), &IsoCountries, &AddressLayoutTable::default())
                .unwrap();
        assert_eq!(
            html.trim_end(),
            "<address class=\"address\">\n\
             \t<span class=\"address-line\">Hauptstr. 1</span><br>\n\
             \t<span class=\"address-line\">70173 Stuttgart</span><br>\n\
             \t<span class=\"address-line\">Germany</span>\n\
             </address>"
        );
    }

    #[test]
    fn address_lines_are_escaped() {
        let a = Address::build().line1("<b>Bold</b> & Co").finish();
        let html = address_html(&a, &IsoCountries, AddressLayout::Generic).unwrap();
        assert!(html.contains("&lt;b&gt;Bold&lt;"));
        assert!(html.contains("&amp; Co"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn render_map_preview() {
        let preview = map_preview(&stuttgart(), &IsoCountries, 320, 240).unwrap();
        let html = address_map_html(&preview).unwrap();
        assert!(html.starts_with("<a class=\"address-map\" href=\""));
        assert!(html.contains("width=\"320\" height=\"240\""));
        assert!(html.contains("alt=\"Hauptstr. 1, Stuttgart, 70173, Germany\""));
        assert!(html.contains("Hauptstr.+1%2C+Stuttgart%2C+70173%2C+Germany"));
    }
}
