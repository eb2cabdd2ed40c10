use super::layout::render_page;
use crate::models::sized_image;
use crate::services::gym_service::GYM_PHOTO;
use crate::utils::escape_html;

pub fn render_home() -> String {
    let content = format!(
        "<div class=\"text-center\">
    <h1 class=\"text-4xl font-bold mb-6\">Welcome to GymFinder</h1>
    <p class=\"text-xl mb-8\">Discover and book gyms near you with ease.</p>
    <a href=\"/gyms\" class=\"bg-blue-600 text-white px-6 py-3 rounded-full text-lg font-semibold inline-flex items-center hover:bg-blue-700 transition duration-300\">
        Find Gyms Now
    </a>
    <div class=\"mt-12\">
        <img src=\"{}\" alt=\"Gym equipment\" class=\"rounded-lg shadow-xl mx-auto\" />
    </div>
</div>",
        escape_html(&sized_image(GYM_PHOTO, 1350))
    );
    render_page("Home", &content)
}
