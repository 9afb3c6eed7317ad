use crate::catalog::PreservationMethod;

/// Static explanation of a preservation method, shown by the presentation
/// layer when the user asks how a method works.
pub struct MethodExplanation {
    pub title: &'static str,
    pub explanation: &'static str,
    pub process: &'static str,
    pub examples: &'static str,
    pub benefits: &'static str,
}

/// Glossary lookup. Total over the closed enum, so every recipe tag has an
/// entry to show.
pub fn explanation_for(method: PreservationMethod) -> &'static MethodExplanation {
    match method {
        PreservationMethod::Salt => &SALT,
        PreservationMethod::Acid => &ACID,
        PreservationMethod::Heat => &HEAT,
        PreservationMethod::Oil => &OIL,
        PreservationMethod::Fermentation => &FERMENTATION,
    }
}

static SALT: MethodExplanation = MethodExplanation {
    title: "Salt Preservation - Nature's Original Preservative",
    explanation: "Salt preservation works through osmotic dehydration and creating an \
        inhospitable environment for harmful bacteria. When salt is applied to food, it \
        draws out moisture through osmosis, reducing water activity (aw) below 0.95, \
        which most pathogenic bacteria need to survive.",
    process: "1. Osmosis: Salt draws water out of food and bacterial cells\n\
        2. Dehydration: Reduced moisture prevents bacterial growth\n\
        3. Protein denaturation: Salt denatures bacterial proteins\n\
        4. Enhanced flavor: Concentrates natural flavors in food",
    examples: "Preserved lemons, salt-cured fish, sauerkraut, bacon",
    benefits: "Extends shelf life, enhances flavor, maintains texture, natural method",
};

static ACID: MethodExplanation = MethodExplanation {
    title: "Acid Preservation - The Power of pH",
    explanation: "Acidic environments (pH below 4.6) prevent the growth of harmful \
        bacteria, including Clostridium botulinum. Acids denature bacterial proteins \
        and disrupt cell membranes, creating an inhospitable environment for pathogens.",
    process: "1. pH reduction: Acids lower environmental pH\n\
        2. Protein denaturation: Acids unfold bacterial proteins\n\
        3. Cell membrane disruption: Acids damage bacterial cell walls\n\
        4. Enzyme inhibition: Acids prevent harmful enzyme activity",
    examples: "Pickled vegetables, vinegar preservation, citrus marinades, tomato-based sauces",
    benefits: "Safe preservation, enhanced digestion, vitamin C retention, probiotic potential",
};

static HEAT: MethodExplanation = MethodExplanation {
    title: "Heat Treatment - Thermal Destruction of Pathogens",
    explanation: "Heat treatment kills harmful microorganisms by denaturing their \
        proteins and disrupting cellular structures. Different temperatures are \
        effective against different pathogens, with 165°F (74°C) being the standard \
        for most foods.",
    process: "1. Protein coagulation: Heat unfolds and coagulates proteins\n\
        2. Cell membrane destruction: Heat damages cellular structures\n\
        3. Enzyme deactivation: Heat destroys harmful enzymes\n\
        4. Moisture reduction: Heat can remove water content",
    examples: "Cooking, pasteurization, canning, smoking",
    benefits: "Immediate pathogen destruction, enhanced digestibility, flavor development, \
        versatile method",
};

static OIL: MethodExplanation = MethodExplanation {
    title: "Oil Coating - Creating Protective Barriers",
    explanation: "Oil preservation works by creating an anaerobic (oxygen-free) \
        environment that prevents oxidation and bacterial growth. Oil also extracts \
        and preserves fat-soluble compounds while maintaining moisture in foods.",
    process: "1. Oxygen displacement: Oil creates anaerobic environment\n\
        2. Moisture retention: Oil prevents water loss\n\
        3. Compound extraction: Oil dissolves fat-soluble flavors\n\
        4. Barrier formation: Oil coating prevents contamination",
    examples: "Confit, herb-infused oils, oil-packed vegetables, sardines in oil",
    benefits: "Extended shelf life, enhanced flavors, nutrient preservation, texture maintenance",
};

static FERMENTATION: MethodExplanation = MethodExplanation {
    title: "Fermentation - Beneficial Bacteria at Work",
    explanation: "Fermentation uses beneficial bacteria to convert sugars into acids, \
        alcohol, or gases. This process creates an acidic environment that preserves \
        food while developing beneficial probiotics and enhanced nutritional value.",
    process: "1. Bacterial activity: Beneficial bacteria consume sugars\n\
        2. Acid production: Bacteria produce lactic or acetic acid\n\
        3. pH reduction: Acid lowers environmental pH\n\
        4. Probiotic development: Beneficial bacteria multiply",
    examples: "Sauerkraut, kimchi, yogurt, sourdough, miso",
    benefits: "Probiotic development, enhanced nutrition, improved digestibility, unique flavors",
};
