use super::layout::render_page;
use crate::models::GymSummary;
use crate::utils::escape_html;

fn gym_card(gym: &GymSummary) -> String {
    format!(
        "<a href=\"/gym/{id}\" class=\"bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition duration-300\">
    <img src=\"{image}\" alt=\"{name}\" class=\"w-full h-48 object-cover\" />
    <div class=\"p-4\">
        <h2 class=\"text-xl font-semibold mb-2\">{name}</h2>
        <p class=\"text-gray-600 mb-2 flex items-center\">{address}</p>
        <div class=\"flex items-center\"><span>{rating:.1}</span></div>
    </div>
</a>",
        id = gym.id,
        image = escape_html(&gym.thumbnail_url()),
        name = escape_html(&gym.name),
        address = escape_html(&gym.address),
        rating = gym.rating,
    )
}

/// `gyms` is `None` while no location has been entered; the query is
/// disabled and only the search form shows.
pub fn render_gym_list(location: &str, gyms: Option<Result<Vec<GymSummary>, String>>) -> String {
    let results = match gyms {
        None => String::new(),
        Some(Err(message)) => {
            return render_page(
                "Find Gyms",
                &format!("<div>An error occurred: {}</div>", escape_html(&message)),
            )
        }
        Some(Ok(gyms)) => gyms.iter().map(gym_card).collect::<Vec<_>>().join("\n"),
    };

    let content = format!(
        "<div>
    <h1 class=\"text-3xl font-bold mb-6\">Find Gyms Near You</h1>
    <form method=\"get\" action=\"/gyms\" class=\"mb-8\">
        <div class=\"flex\">
            <input type=\"text\" name=\"location\" value=\"{location}\" placeholder=\"Enter your location\" class=\"flex-grow px-4 py-2 border border-gray-300 rounded-l-md focus:outline-none focus:ring-2 focus:ring-blue-500\" />
            <button type=\"submit\" class=\"bg-blue-600 text-white px-6 py-2 rounded-r-md hover:bg-blue-700 transition duration-300\">Search</button>
        </div>
    </form>
    <div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">
        {results}
    </div>
</div>",
        location = escape_html(location),
        results = results,
    );
    render_page("Find Gyms", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gym() -> GymSummary {
        GymSummary {
            id: 2,
            name: "PowerHouse Gym".to_string(),
            address: "456 Elm St, Townsburg".to_string(),
            rating: 4.2,
            image: "https://example.com/gym.jpg".to_string(),
        }
    }

    #[test]
    fn disabled_query_shows_only_the_form() {
        let page = render_gym_list("", None);
        assert!(page.contains("placeholder=\"Enter your location\""));
        assert!(!page.contains("href=\"/gym/"));
    }

    #[test]
    fn cards_link_to_details() {
        let page = render_gym_list("Townsburg", Some(Ok(vec![gym()])));
        assert!(page.contains("href=\"/gym/2\""));
        assert!(page.contains("PowerHouse Gym"));
        assert!(page.contains("456 Elm St, Townsburg"));
        assert!(page.contains("<span>4.2</span>"));
        assert!(page.contains("w=300"));
        assert!(page.contains("value=\"Townsburg\""));
    }

    #[test]
    fn fetch_errors_replace_the_page() {
        let page = render_gym_list("x", Some(Err("directory offline".to_string())));
        assert!(page.contains("An error occurred: directory offline"));
        assert!(!page.contains("Find Gyms Near You"));
    }
}
