//! The No Reference landing page, in a terminal.
//!
//! Three columns type themselves out in a stagger, the action menu follows
//! the first one, and the panels answer the keyboard:
//!
//! - `c` toggles the contact form
//! - `p` toggles the privacy policy
//! - `esc` closes whichever panel is open
//! - `ctrl+c` quits
//!
//! Run with: cargo run --example landing

use std::io;

use reveal_tui::{
    ColumnSpec, PageProps, Panel, compose_page, mount, on_key, page, run,
};

fn main() {
    if let Err(err) = landing() {
        eprintln!("landing failed: {err}");
        std::process::exit(1);
    }
}

fn landing() -> io::Result<()> {
    let (landing, landing_cleanup) = page(PageProps {
        columns: vec![
            ColumnSpec::new("aboutText", ABOUT_BODY),
            ColumnSpec::new("projectsText", PROJECTS_BODY),
            ColumnSpec::new("teamText", TEAM_BODY),
        ],
        stagger_ms: 200,
        privacy_text: POLICY_TEXT.to_string(),
    });

    let gate = landing.gate().clone();
    let contact_key = on_key("c", move || {
        gate.toggle(Panel::Contact);
        true
    });
    let gate = landing.gate().clone();
    let privacy_key = on_key("p", move || {
        gate.toggle(Panel::Privacy);
        true
    });
    let gate = landing.gate().clone();
    let close_key = on_key("esc", move || {
        gate.close();
        true
    });

    let view = landing.clone();
    let handle = mount(move |width, height| compose_page(&view, width, height))?;
    run(&handle)?;
    handle.unmount()?;

    close_key();
    privacy_key();
    contact_key();
    landing_cleanup();
    Ok(())
}

const ABOUT_BODY: &str = r#"
No Reference is an enmeshment of intertwined analogue and digital entities. Rooted in research and experimentation, it convenes a diverse constellation of actants to probe the capacities of art to summon possible presents.

Throughout our research we approach the territory as a living archive by analysing its symbiosis with organic, inorganic and digital agents and their environments in historical, contemporary, and speculative contexts. We aim to investigate instances in which these symbiotic systems have been used and abused throughout history and discuss the ramifications of these in political imaginaries.

We develop long-term Regenerative Research Projects: adaptive inquiries that do not merely observe entanglement but seek to renew cultural, ecological, and technological terrains. Regenerative research here signals cyclical growth, ethical attunement, and distributed knowledge-making—fostering practices that are responsive, transformative, and attuned to the urgencies of the present.
"#;

const PROJECTS_BODY: &str = r#"
Each project unfurls through a seven-phase methodology:

1. Research — Emergence of a hypothesis, concept, or provocation, informed by notes, diagrams, and situated inquiry.

2. Metaphoric & Metonymic Processes — Extraction of the key metaphors, metonymies, and icons shaping the conceptual scaffold of the research.

3. Conclusions — Development of textual outputs, including essays and literary forms (such as fiction novels, fables, short stories, and so on) that synthesize findings and symbolic displacements.

4. Preliminary Art Process — Early-stage artistic probing; where speculative forms and visual logics are trialed and tensions articulated.

5. Comparative Poetic Testing — A phase of perceptual analysis and cognitive reception: how does the work resonate, affect, or disorient?

6. Final Art Process — Culmination of prior stages into a fully realized artwork, where conceptual frameworks and visual strategies crystallize.

7. Contemporary Souvenirs — Translation of core metaphors and icons into artistic artefacts (interventions, paintings, videos, sounds, installations, etc.)—objects of interpretation and carriers of residual knowledge beyond the textual.
"#;

const TEAM_BODY: &str = r#"
Each project within No Reference is developed through the collaboration of multiple actants with diverse cultural, territorial, and disciplinary backgrounds. These contributors bring different perspectives and methodologies into dialogue. Rather than adhering to fixed roles, actants engage in transversal exchanges that shape the process through mutual influence and adaptive entangled making.

This assembly of collaborators forms a dynamic, non-hierarchical network in which human and nonhuman agencies — including organic, inorganic, and digital forms — are regarded with equal ontological significance. Through this entangled approach, each project becomes an ecosystem of interdependent relationships where knowledge production is collective, emergent, and regenerative.

Our aim is to foster a framework where disciplinary boundaries dissolve, to enable speculative practices, critical inquiry and experimentation.

Actants = {
    "Gerardo Nolasco": "Multidisciplinary artist who coordinates all steps of the projects.",
    "Jose Magaña": "Cultural anthropologist who conducts the research for the projects.",
    "Hiyori Yoshida": "Experimental composer who develops the music and sound installations of the projects.",
    "Iska Dimalanta": "Coder and creative technologist supporting programming implementation.",
    "Soren Ravn": "Designer handling the implementation of visual design, 3D modelling, AR, and VR for the projects.",
    "Fenja Vollbrecht": "Provides scientific insights to the projects.",
    "Tobias Ziebell": "Industrial designer who develops all technical aspects of the project, from initial setups to final production.",
    "Lupita Ndlovu": "Speculative storyteller developing short stories and narrative elements.",
    "Gellert Rózsás": "Fictional filmmaker responsible for producing the videos and animations of the projects.",
    "János Kovács": "Specialized in contemporary and new media art, develops the conceptual framework for the exhibition of the projects."
}
"#;

const POLICY_TEXT: &str = r#"Privacy Policy
Effective Date: January 1, 2026

At No Reference, your privacy is important to us. This Privacy Policy applies to all of our services, including our website and any applications for smartphones, tablets, or other devices.

1. No Data Collection
We want to be completely transparent: We do not collect, store, or share any personal data or information of any kind.

2. No Third-Party Sharing
Because we do not collect any data, we do not and cannot share your information with any third party—whether for advertising, analytics, or any other purpose.

3. Security
Although we do not process any personal information, we are committed to keeping our website and applications secure and free from malicious code or vulnerabilities.

4. Children's Privacy
Since we do not collect any information, our services are safe for users of all ages, including children. We comply with applicable privacy regulations, including COPPA.

5. Changes to This Policy
If No Reference ever decides to collect any data in the future, this Privacy Policy will be updated, and users will be given clear notice and options. We encourage users to review this policy periodically for any changes.

6. Contact Us
If you have any questions or concerns about this Privacy Policy, you can contact us at:
info@noreference.art"#;
