//! Complaints, privacy, cookie and terms policies.
//!
//! Policies are static block lists so the quick links and the sections
//! stay in step.

use super::{PageContext, PageView, write_hero, write_rich};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError, schema};
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

enum Block {
    Heading(&'static str),
    Subheading(&'static str),
    /// Paragraph; `**bold**` segments are emphasised.
    Text(&'static str),
    List(&'static [&'static str]),
    Steps(&'static [&'static str]),
    /// Paragraph ending in the firm's email and phone links.
    Reach(&'static str),
    /// External site: `(label, url, shown)`.
    Site(&'static str, &'static str, &'static str),
}

struct Policy {
    id: &'static str,
    title: &'static str,
    blocks: &'static [Block],
}

use Block::*;

const POLICIES: [Policy; 4] = [
    Policy {
        id: "complaints",
        title: "Complaints Procedure",
        blocks: &[
            Text("At **Nandy & Co. Solicitors**, we are committed to providing high-quality legal services to all our clients. However, if you are unhappy with any aspect of our service, we want to hear from you."),
            Heading("How to Make a Complaint"),
            Reach("**Contact us directly:** Please raise your concerns with the solicitor handling your case or contact our office manager."),
            Steps(&[
                "**Written complaints:** You can submit a written complaint by email or post to our Forest Gate office. Please include your name, contact details, case reference (if applicable), and a clear description of your complaint.",
                "**Our response:** We will acknowledge your complaint within 3 working days and provide a full response within 21 days. If we need more time to investigate, we will keep you informed.",
                "**Resolution:** We will work with you to resolve the issue fairly and promptly. If appropriate, we may offer remedies such as an apology, explanation, or fee adjustment.",
            ]),
            Heading("If You Remain Dissatisfied"),
            Text("If you are not satisfied with our response, you have the right to refer your complaint to:"),
            Subheading("Legal Ombudsman"),
            Text("The Legal Ombudsman investigates complaints about legal service providers in England and Wales."),
            List(&[
                "**Address:** PO Box 6806, Wolverhampton, WV1 9WJ",
                "**Phone:** 0300 555 0333",
                "**Email:** enquiries@legalombudsman.org.uk",
            ]),
            Site("Website:", "https://www.legalombudsman.org.uk", "www.legalombudsman.org.uk"),
            Text("Note: You must usually refer your complaint to the Legal Ombudsman within 6 months of our final response and within 6 years of the issue arising (or within 3 years of when you should reasonably have known about it)."),
            Subheading("Solicitors Regulation Authority (SRA)"),
            Text("You can also report concerns about our conduct to the SRA, which regulates solicitors in England and Wales."),
            Site("Website:", "https://www.sra.org.uk", "www.sra.org.uk"),
        ],
    },
    Policy {
        id: "privacy",
        title: "Privacy Policy",
        blocks: &[
            Text("**Nandy & Co. Solicitors** is committed to protecting your privacy and personal data. This policy explains how we collect, use, and safeguard your information in accordance with UK data protection laws including the UK GDPR and Data Protection Act 2018."),
            Heading("Information We Collect"),
            Text("When you instruct us or enquire about our services, we may collect:"),
            List(&[
                "Personal details (name, address, date of birth, contact information)",
                "Immigration status and documentation",
                "Financial information (where relevant to your case)",
                "Family and relationship information",
                "Employment and education history",
                "Any other information relevant to your legal matter",
            ]),
            Heading("How We Use Your Information"),
            Text("We use your personal data to:"),
            List(&[
                "Provide legal advice and representation",
                "Prepare and submit applications to the Home Office and other authorities",
                "Communicate with you about your case",
                "Comply with legal and regulatory obligations",
                "Maintain accurate records and accounts",
                "Improve our services",
            ]),
            Heading("Legal Basis for Processing"),
            Text("We process your personal data based on: (1) **Contract** – to provide legal services you have instructed us to perform; (2) **Legal obligation** – to comply with professional and regulatory requirements; (3) **Legitimate interests** – to run our business effectively and provide quality legal services."),
            Heading("Data Security & Retention"),
            Text("We implement appropriate technical and organizational measures to protect your data from unauthorized access, loss, or misuse. Your information is stored securely and accessed only by authorized personnel."),
            Text("We retain your data for as long as necessary to provide our services and comply with legal obligations. Client files are typically retained for 7 years after the conclusion of a matter, in line with professional requirements."),
            Heading("Your Rights"),
            Text("Under UK data protection law, you have the right to:"),
            List(&[
                "Access your personal data",
                "Correct inaccurate data",
                "Request deletion of your data (in certain circumstances)",
                "Object to processing of your data",
                "Request restriction of processing",
                "Data portability",
            ]),
            Reach("To exercise these rights, please contact us."),
            Text("**Questions or concerns?** If you have any questions about how we handle your data, please contact us. You also have the right to lodge a complaint with the Information Commissioner's Office (ICO)."),
            Site("ICO:", "https://ico.org.uk", "www.ico.org.uk"),
        ],
    },
    Policy {
        id: "cookies",
        title: "Cookie Policy",
        blocks: &[
            Text("This website uses cookies to improve your browsing experience and help us understand how visitors use our site."),
            Heading("What Are Cookies?"),
            Text("Cookies are small text files stored on your device when you visit a website. They help websites remember your preferences and provide a better user experience."),
            Heading("Types of Cookies We Use"),
            Subheading("Essential Cookies"),
            Text("These cookies are necessary for the website to function properly. They enable basic features like page navigation and access to secure areas."),
            Subheading("Analytics Cookies"),
            Text("We use analytics cookies to understand how visitors interact with our website. This helps us improve our content and services. These cookies collect anonymous information."),
            Heading("Managing Cookies"),
            Text("You can control and manage cookies through your browser settings. Most browsers allow you to refuse cookies or delete existing cookies. Please note that disabling cookies may affect the functionality of this website."),
        ],
    },
    Policy {
        id: "terms",
        title: "Terms of Service",
        blocks: &[
            Text("These terms govern your use of our website and the provision of legal services by **Nandy & Co. Solicitors**."),
            Heading("Professional Regulation"),
            Text("Nandy & Co. Solicitors is authorized and regulated by the Solicitors Regulation Authority (SRA). We comply with the SRA Standards and Regulations, including the SRA Code of Conduct for Solicitors."),
            Heading("Client Care & Engagement"),
            Text("When you instruct us, we will provide you with:"),
            List(&[
                "A client care letter setting out the terms of our engagement",
                "Clear information about our fees and costs",
                "Details of the solicitor handling your matter",
                "Information about our complaints procedure",
                "Details of our professional indemnity insurance",
            ]),
            Heading("Fees & Payment"),
            Text("Our fees will be explained clearly before we begin work on your matter. We may require payment on account before commencing work. Invoices are payable within 14 days unless otherwise agreed. We reserve the right to charge interest on overdue accounts."),
            Heading("Limitation of Liability"),
            Text("Our liability to you is limited in accordance with our professional indemnity insurance and applicable law. We maintain professional indemnity insurance in accordance with SRA requirements."),
            Heading("Website Disclaimer"),
            Text("The information on this website is for general guidance only and does not constitute legal advice. We recommend that you obtain specific legal advice for your particular circumstances. We do not accept liability for any loss arising from reliance on information contained on this website."),
            Heading("Intellectual Property"),
            Text("All content on this website, including text, images, and logos, is the property of Nandy & Co. Solicitors and is protected by copyright law. You may not reproduce, distribute, or use any content without our written permission."),
        ],
    },
];

pub(super) struct Legal;

impl PageView for Legal {
    fn route(&self) -> Route {
        Route::Legal
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        let graph = schema::graph(vec![
            schema::web_page(
                "Legal Information & Policies",
                "Complaints procedure, privacy policy and legal information for Nandy & Co. Solicitors",
                "/legal",
                config,
            ),
            schema::breadcrumbs(&[("Home", "/"), ("Legal Information", "/legal")], config.base_url()),
        ]);

        MetaSnapshot::builder(
            "Legal Information & Policies | Nandy & Co. Solicitors Forest Gate",
            "Complaints procedure, privacy policy and legal information for Nandy & Co. Solicitors. SRA regulated, Lexcel accredited immigration solicitors in Forest Gate, London E7.",
        )
        .keywords("legal policies, complaints procedure, privacy policy, SRA regulated solicitors, Lexcel accredited")
        .canonical("/legal")
        .schema(graph)
        .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        write_start(w, "main", &[])?;
        write_hero(
            w,
            "Legal Information",
            "Important information about our services, policies and procedures",
        )?;

        write_start(w, "nav", &[("class", "py-12 bg-white border-b border-gray-200"), ("aria-label", "Policies")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6 flex flex-wrap justify-center gap-4")])?;
        for policy in &POLICIES {
            let href = format!("#{}", policy.id);
            write_elem(
                w,
                "a",
                &[("href", href.as_str()), ("class", "bg-teal-50 hover:bg-teal-100 text-teal-700 px-6 py-3 rounded-lg font-semibold")],
                policy.title,
            )?;
        }
        write_end(w, "div")?;
        write_end(w, "nav")?;

        for (i, policy) in POLICIES.iter().enumerate() {
            let class = if i % 2 == 0 {
                "py-20 bg-white scroll-mt-24"
            } else {
                "py-20 bg-gradient-to-br from-gray-50 to-teal-50 scroll-mt-24"
            };
            write_start(w, "section", &[("id", policy.id), ("class", class)])?;
            write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6 text-gray-700 leading-relaxed space-y-4")])?;
            write_elem(w, "h2", &[("class", "text-4xl font-bold text-gray-900 mb-8")], policy.title)?;
            for block in policy.blocks {
                write_block(w, block, ctx.config)?;
            }
            write_end(w, "div")?;
            write_end(w, "section")?;
        }

        write_questions(w, ctx.config)?;
        write_end(w, "main")
    }
}

fn write_block(w: &mut XmlWriter, block: &Block, config: &SiteConfig) -> Result<()> {
    match block {
        Heading(text) => write_elem(w, "h3", &[("class", "text-2xl font-bold text-gray-900 mt-8 mb-4")], text),
        Subheading(text) => write_elem(w, "h4", &[("class", "text-lg font-bold text-gray-900 mt-6 mb-2")], text),
        Text(text) => write_rich(w, "p", &[], text),
        List(items) | Steps(items) => {
            let (tag, class) = match block {
                Steps(_) => ("ol", "list-decimal pl-6 space-y-3"),
                _ => ("ul", "list-disc pl-6 space-y-2"),
            };
            write_start(w, tag, &[("class", class)])?;
            for item in *items {
                write_rich(w, "li", &[], item)?;
            }
            write_end(w, tag)
        }
        Reach(text) => {
            let base = &config.base;
            let tel = base.tel_href();
            let mailto = format!("mailto:{}", base.email);
            let link = "text-teal-600 hover:text-teal-700 font-semibold";

            write_start(w, "p", &[])?;
            write_rich(w, "span", &[], text)?;
            write_text(w, " Email ")?;
            write_elem(w, "a", &[("href", mailto.as_str()), ("class", link)], &base.email)?;
            write_text(w, " or call ")?;
            write_elem(w, "a", &[("href", tel.as_str()), ("class", link)], &base.phone_display)?;
            write_text(w, ".")?;
            write_end(w, "p")
        }
        Site(label, url, shown) => {
            write_start(w, "p", &[])?;
            write_elem(w, "strong", &[], label)?;
            write_text(w, " ")?;
            write_elem(
                w,
                "a",
                &[
                    ("href", *url),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                    ("class", "text-teal-600 hover:text-teal-700"),
                ],
                shown,
            )?;
            write_end(w, "p")
        }
    }
}

fn write_questions(w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
    let base = &config.base;
    let tel = base.tel_href();
    let mailto = format!("mailto:{}", base.email);

    write_start(w, "section", &[("class", "py-20 bg-gradient-to-r from-teal-600 to-teal-700")])?;
    write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6 text-center")])?;
    write_elem(w, "h2", &[("class", "text-3xl md:text-4xl font-bold text-white mb-6")], "Questions About Our Policies?")?;
    write_elem(
        w,
        "p",
        &[("class", "text-xl text-teal-50 mb-8")],
        "If you have any questions about these policies or our legal services, please get in touch",
    )?;
    write_start(w, "div", &[("class", "flex flex-col sm:flex-row gap-4 justify-center")])?;
    write_start(w, "a", &[("href", tel.as_str()), ("class", "bg-white hover:bg-gray-50 text-teal-700 px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center justify-center gap-2")])?;
    write_icon(w, "ri-phone-line text-xl")?;
    write_text(w, &base.phone_display)?;
    write_end(w, "a")?;
    write_start(w, "a", &[("href", mailto.as_str()), ("class", "bg-teal-800 hover:bg-teal-900 text-white px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center justify-center gap-2")])?;
    write_icon(w, "ri-mail-line text-xl")?;
    write_text(w, "Email Us")?;
    write_end(w, "a")?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}
