use crate::utils::escape_html;

const BRAND: &str = "GymFinder";

fn header() -> String {
    format!(
        "<header class=\"bg-blue-600 text-white shadow-md\">
    <div class=\"container mx-auto px-4 py-4 flex justify-between items-center\">
        <a href=\"/\" class=\"flex items-center space-x-2\">
            <span class=\"text-xl font-bold\">{brand}</span>
        </a>
        <nav>
            <ul class=\"flex space-x-4\">
                <li><a href=\"/\" class=\"hover:text-blue-200\">Home</a></li>
                <li><a href=\"/gyms\" class=\"hover:text-blue-200\">Find Gyms</a></li>
                <li><a href=\"/profile\" class=\"hover:text-blue-200\">Profile</a></li>
            </ul>
        </nav>
    </div>
</header>",
        brand = BRAND
    )
}

fn footer() -> String {
    format!(
        "<footer class=\"bg-gray-800 text-white py-6\">
    <div class=\"container mx-auto px-4 text-center\">
        <p>&copy; 2024 {brand}. All rights reserved.</p>
        <p class=\"mt-2\">Find your perfect gym and stay fit!</p>
    </div>
</footer>",
        brand = BRAND
    )
}

/// Wraps page content in the navigation shell shared by every view
pub fn render_page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title} | {brand}</title>
    <script src=\"https://cdn.tailwindcss.com\"></script>
</head>
<body>
    <div class=\"flex flex-col min-h-screen bg-gray-100\">
        {header}
        <main class=\"flex-grow container mx-auto px-4 py-8\">
            {content}
        </main>
        {footer}
    </div>
</body>
</html>",
        title = escape_html(title),
        brand = BRAND,
        header = header(),
        content = content,
        footer = footer(),
    )
}

pub fn render_error(message: &str) -> String {
    render_page(
        "Error",
        &format!("<div>An error occurred: {}</div>", escape_html(message)),
    )
}

pub fn render_not_found() -> String {
    render_page("Gym not found", "<div>Gym not found</div>")
}
