use crate::booking::{BookingRequest, Field};
use crate::form::{Notice, NoticeKind};
use std::fmt::Write;
use std::time::Duration;

const STYLE: &str = r#"
:root { --sage: #9CAF88; --beige: #F5F1E8; --ink: #2f3a2a; }
body { margin: 0; font-family: Georgia, serif; color: var(--ink); background: white; }
header, footer { display: flex; justify-content: space-between; align-items: center; padding: 1rem 2rem; }
header { border-bottom: 1px solid #e5e5e5; position: sticky; top: 0; background: white; }
footer { background: var(--ink); color: white; }
footer a { color: white; }
nav a { margin-left: 2rem; color: inherit; text-decoration: none; }
section { padding: 4rem 2rem; max-width: 960px; margin: 0 auto; }
.eyebrow { color: var(--sage); text-transform: uppercase; letter-spacing: .2em; font-size: .8rem; }
.hero { background: linear-gradient(var(--beige), white); max-width: none; }
.hero img { width: 20rem; border-radius: 1rem; border: 8px solid var(--beige); }
.services { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; }
.card { background: var(--beige); padding: 2rem; border-radius: .75rem; text-align: center; }
.button { display: inline-block; padding: .75rem 1.5rem; border-radius: .5rem; background: var(--sage); color: white; border: 0; text-decoration: none; font-size: 1rem; cursor: pointer; }
form label { display: block; margin-top: 1rem; }
form input, form textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
.notice { padding: 1rem; border-radius: .5rem; margin: 1rem 0; }
.notice.error { background: #fde8e8; color: #8a1c1c; }
.notice.success { background: #e7f3e1; color: #2f5d1f; }
"#;

const SERVICES: [(&str, &str); 3] = [
    (
        "Nutrição Clínica",
        "Avaliação e acompanhamento nutricional individualizado para diferentes condições de saúde.",
    ),
    (
        "Saúde Mental",
        "Abordagem humanizada do cuidado nutricional para pacientes com transtornos mentais.",
    ),
    (
        "Saúde Coletiva",
        "Educação alimentar e nutricional, promoção da saúde e segurança alimentar.",
    ),
];

/// Everything the home page needs besides static copy.
pub struct HomePage<'a> {
    pub whatsapp_link: &'a str,
    pub email_link: &'a str,
    pub contact_email: &'a str,
    pub photo_src: &'a str,
    pub year: i32,
    /// Values to put back into the form.
    pub request: &'a BookingRequest,
    pub notices: &'a [Notice],
    pub booking_open: bool,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn head(title: &str, extra: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {extra}<title>{}</title>\n<style>{STYLE}</style>\n</head>\n",
        escape_html(title)
    )
}

fn notice_html(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
    };
    format!(
        "<div class=\"notice {class}\" role=\"alert\">{}</div>\n",
        escape_html(&notice.text)
    )
}

fn input(out: &mut String, request: &BookingRequest, field: Field, kind: &str, placeholder: &str) {
    let name = field.wire_name();
    let _ = write!(
        out,
        "<label for=\"{name}\">{} *</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{}\" placeholder=\"{placeholder}\" required>\n",
        field.label(),
        escape_html(request.get(field)),
    );
}

fn booking_form(page: &HomePage<'_>) -> String {
    let mut out = String::new();
    let open = if page.booking_open { " open" } else { "" };
    let _ = write!(
        out,
        "<details id=\"agendar\"{open}>\n<summary class=\"button\">Agendar Consulta</summary>\n\
         <h3>Agende sua Consulta</h3>\n"
    );
    for notice in page.notices {
        out.push_str(&notice_html(notice));
    }
    out.push_str("<form method=\"post\" action=\"/agendar\">\n");
    input(&mut out, page.request, Field::Name, "text", "Seu nome completo");
    input(&mut out, page.request, Field::Email, "email", "seu@email.com");
    input(&mut out, page.request, Field::Phone, "tel", "(11) 99999-9999");
    input(&mut out, page.request, Field::Date, "date", "");
    input(&mut out, page.request, Field::Time, "time", "");
    let _ = write!(
        out,
        "<label for=\"message\">Mensagem (opcional)</label>\n\
         <textarea id=\"message\" name=\"message\" rows=\"3\" placeholder=\"Conte-nos sobre sua situação...\">{}</textarea>\n\
         <p><button type=\"submit\" class=\"button\">Enviar para WhatsApp</button></p>\n\
         </form>\n</details>\n",
        escape_html(&page.request.message)
    );
    out
}

pub fn render_home(page: &HomePage<'_>) -> String {
    let mut out = head("Janiele Carvalho - Nutricionista", "");
    out.push_str("<body>\n");

    out.push_str(
        "<header><strong>Janiele Carvalho</strong>\n<nav>\
         <a href=\"#sobre\">Sobre</a><a href=\"#servicos\">Serviços</a><a href=\"#contato\">Contato</a>\
         </nav></header>\n",
    );

    out.push_str(
        "<section class=\"hero\">\n<p class=\"eyebrow\">Nutricionista Profissional</p>\n\
         <h1>Saúde através da Nutrição</h1>\n\
         <p>Nutricionista com sólida formação em Nutrição Clínica, Hospitalar, Saúde Mental e Saúde Coletiva. \
         Atuo com foco em evidências científicas e cuidado integral ao paciente.</p>\n",
    );
    let _ = writeln!(
        out,
        "<img src=\"{}\" alt=\"Janiele Carvalho - Nutricionista\">",
        escape_html(page.photo_src)
    );
    out.push_str(&booking_form(page));
    let _ = writeln!(
        out,
        "<p><a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">WhatsApp</a></p>\n</section>",
        escape_html(page.whatsapp_link)
    );

    out.push_str(
        "<section id=\"sobre\">\n<p class=\"eyebrow\">Sobre Mim</p>\n<h2>Formação e Experiência</h2>\n\
         <p>Sou nutricionista com sólida formação técnica e prática em Nutrição Clínica, Hospitalar, \
         Saúde Mental, Saúde Coletiva e Segurança Alimentar, atuando com foco em evidências científicas, \
         ética profissional e cuidado integral ao paciente.</p>\n\
         <h3>Experiência Clínica Hospitalar</h3>\n\
         <p>Avaliações nutricionais completas, acompanhamento diário em leitos e condutas dietoterápicas \
         individualizadas, alinhadas às diretrizes institucionais.</p>\n\
         <h3>Unidades de Alimentação e Nutrição</h3>\n\
         <p>Controle de qualidade dos alimentos, boas práticas de manipulação e adequação de dietas às \
         diferentes condições clínicas.</p>\n\
         <h3>Saúde Mental e Bem-estar</h3>\n\
         <p>Cuidado nutricional de pacientes com transtornos mentais, com abordagem humanizada e escuta qualificada.</p>\n\
         </section>\n",
    );

    out.push_str(
        "<section id=\"servicos\">\n<p class=\"eyebrow\">Serviços</p>\n<h2>Áreas de Atuação</h2>\n\
         <div class=\"services\">\n",
    );
    for (title, description) in SERVICES {
        let _ = writeln!(
            out,
            "<div class=\"card\"><h3>{title}</h3><p>{description}</p></div>"
        );
    }
    out.push_str("</div>\n</section>\n");

    let _ = write!(
        out,
        "<section id=\"contato\">\n<p class=\"eyebrow\">Contato</p>\n<h2>Entre em Contato</h2>\n\
         <p><a href=\"{whatsapp}\" target=\"_blank\" rel=\"noopener noreferrer\">WhatsApp: (11) 98921-7827</a></p>\n\
         <p><a href=\"{email_link}\">E-mail: {email}</a></p>\n\
         <h3>Localização</h3>\n<p>São Paulo, SP<br>Brasil</p>\n\
         <h3>Pronto para começar?</h3>\n\
         <p>Agende sua consulta agora mesmo e dê o primeiro passo para uma vida mais saudável com orientação profissional.</p>\n\
         <p><a class=\"button\" href=\"#agendar\">Agendar Consulta</a></p>\n\
         </section>\n",
        whatsapp = escape_html(page.whatsapp_link),
        email_link = escape_html(page.email_link),
        email = escape_html(page.contact_email),
    );

    let _ = write!(
        out,
        "<footer><span>&copy; {} Janiele Carvalho - Nutricionista</span>\
         <span><a href=\"{}\">WhatsApp</a> &middot; <a href=\"{}\">E-mail</a></span></footer>\n\
         </body>\n</html>\n",
        page.year,
        escape_html(page.whatsapp_link),
        escape_html(page.email_link),
    );
    out
}

/// Success page: shows the notices, then the browser follows `url` after `delay`.
pub fn render_handoff(notices: &[Notice], url: &str, delay: Duration) -> String {
    let url = escape_html(url);
    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{};url={url}\">\n",
        delay.as_secs_f64()
    );
    let mut out = head("Solicitação enviada", &refresh);
    out.push_str("<body>\n<section>\n");
    for notice in notices {
        out.push_str(&notice_html(notice));
    }
    let _ = write!(
        out,
        "<p>Se o WhatsApp não abrir automaticamente, <a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">clique aqui</a>.</p>\n\
         <p><a href=\"/\">Voltar</a></p>\n</section>\n</body>\n</html>\n"
    );
    out
}
