//! 로그인 성공 후 보여주는 환영 페이지
//!
//! 프로바이더에서 온 값은 모두 신뢰할 수 없으므로 출력 전에 HTML 이스케이프합니다.

use crate::domain::entities::users::user_profile::UserProfile;
use crate::utils::string_utils::escape_html;

pub fn render_welcome_page(profile: &UserProfile, site_name: &str) -> String {
    let name = escape_html(profile.display_name());
    let site = escape_html(site_name);

    let mut details = String::new();
    if let Some(email) = profile.email.as_deref() {
        details.push_str(&format!("    <p>Email: {}</p>\n", escape_html(email)));
    }
    if let Some(picture) = profile.picture_url.as_deref() {
        details.push_str(&format!(
            "    <img src=\"{}\" alt=\"Profile picture\" width=\"96\" height=\"96\">\n",
            escape_html(picture)
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"utf-8\">\n\
         \x20   <title>Welcome to {site}</title>\n\
         </head>\n\
         <body>\n\
         \x20   <h1>Hello {name}, welcome to {site}!</h1>\n\
         {details}\
         </body>\n\
         </html>\n"
    )
}
