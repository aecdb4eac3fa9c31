//! Builtin knowledge tables.
//!
//! Compiled into the binary and loaded by [`KnowledgeBase::builtin`](crate::KnowledgeBase::builtin).
//! Table order is significant: matching and medication resolution walk
//! these rows front to back.

/// One medication row: name, dosage, frequency, duration.
pub(crate) type MedicationRow = (&'static str, &'static str, &'static str, &'static str);

/// Symptom keyword to candidate conditions.
pub(crate) static SYMPTOM_CONDITIONS: &[(&str, &[&str])] = &[
    (
        "fever",
        &[
            "Common cold",
            "Flu",
            "COVID-19",
            "Bacterial infection",
            "Viral infection",
            "Pneumonia",
            "Tuberculosis",
            "Malaria",
            "Dengue fever",
            "Typhoid fever",
            "Urinary tract infection",
            "Sepsis",
        ],
    ),
    (
        "cough",
        &[
            "Upper respiratory infection",
            "Bronchitis",
            "Pneumonia",
            "Allergies",
            "Asthma",
            "COPD",
            "Tuberculosis",
            "Lung cancer",
            "Pertussis",
            "Croup",
            "Post-nasal drip",
            "GERD",
        ],
    ),
    (
        "sore throat",
        &[
            "Pharyngitis",
            "Tonsillitis",
            "Strep throat",
            "Mononucleosis",
            "Allergies",
            "GERD",
            "Smoking",
            "Viral infection",
        ],
    ),
    (
        "runny nose",
        &[
            "Common cold",
            "Allergies",
            "Sinusitis",
            "Viral infection",
            "Hay fever",
            "Rhinitis",
        ],
    ),
    (
        "shortness of breath",
        &[
            "Asthma",
            "COPD",
            "Anxiety",
            "Pneumonia",
            "Heart failure",
            "Pulmonary embolism",
            "Anemia",
            "Pneumothorax",
            "Pulmonary hypertension",
        ],
    ),
    (
        "wheezing",
        &[
            "Asthma",
            "COPD",
            "Bronchitis",
            "Heart failure",
            "Anaphylaxis",
            "Foreign body aspiration",
        ],
    ),
    ("chest congestion", &["Bronchitis", "Pneumonia", "COPD", "Asthma", "Heart failure"]),
    (
        "chest pain",
        &[
            "Angina",
            "Heart attack",
            "Costochondritis",
            "Anxiety",
            "GERD",
            "Pneumonia",
            "Pulmonary embolism",
            "Aortic dissection",
            "Pericarditis",
            "Pleurisy",
        ],
    ),
    (
        "palpitations",
        &[
            "Anxiety",
            "Arrhythmia",
            "Hyperthyroidism",
            "Anemia",
            "Caffeine",
            "Stress",
            "Heart disease",
        ],
    ),
    (
        "irregular heartbeat",
        &[
            "Atrial fibrillation",
            "Ventricular tachycardia",
            "Bradycardia",
            "Heart disease",
            "Electrolyte imbalance",
        ],
    ),
    (
        "swelling in legs",
        &[
            "Heart failure",
            "Venous insufficiency",
            "Deep vein thrombosis",
            "Kidney disease",
            "Liver disease",
            "Lymphedema",
        ],
    ),
    (
        "headache",
        &[
            "Tension headache",
            "Migraine",
            "Sinusitis",
            "Dehydration",
            "Hypertension",
            "Cluster headache",
            "Brain tumor",
            "Meningitis",
            "Encephalitis",
            "Subarachnoid hemorrhage",
        ],
    ),
    (
        "migraine",
        &[
            "Migraine",
            "Cluster headache",
            "Tension headache",
            "Hormonal changes",
            "Food triggers",
            "Stress",
            "Sensory stimuli",
        ],
    ),
    (
        "dizziness",
        &[
            "Vertigo",
            "Low blood pressure",
            "Anemia",
            "Inner ear problem",
            "Dehydration",
            "Anxiety",
            "Medication side effect",
            "Benign paroxysmal positional vertigo",
        ],
    ),
    (
        "vertigo",
        &[
            "Benign paroxysmal positional vertigo",
            "Meniere's disease",
            "Vestibular neuritis",
            "Labyrinthitis",
            "Inner ear infection",
        ],
    ),
    (
        "numbness",
        &[
            "Diabetes",
            "Multiple sclerosis",
            "Carpal tunnel syndrome",
            "Stroke",
            "Peripheral neuropathy",
            "Vitamin B12 deficiency",
            "Cervical radiculopathy",
        ],
    ),
    (
        "tingling",
        &[
            "Diabetes",
            "Multiple sclerosis",
            "Carpal tunnel syndrome",
            "Peripheral neuropathy",
            "Vitamin B12 deficiency",
            "Anxiety",
            "Hyperventilation",
        ],
    ),
    (
        "seizures",
        &[
            "Epilepsy",
            "Brain tumor",
            "Stroke",
            "Head injury",
            "Meningitis",
            "Encephalitis",
            "Metabolic disorder",
            "Drug withdrawal",
        ],
    ),
    (
        "memory loss",
        &[
            "Alzheimer's disease",
            "Dementia",
            "Depression",
            "Vitamin B12 deficiency",
            "Thyroid disorder",
            "Brain tumor",
            "Stroke",
        ],
    ),
    (
        "confusion",
        &[
            "Dehydration",
            "Infection",
            "Medication side effect",
            "Dementia",
            "Stroke",
            "Metabolic disorder",
            "Electrolyte imbalance",
        ],
    ),
    (
        "nausea",
        &[
            "Gastritis",
            "Food poisoning",
            "Migraine",
            "Pregnancy",
            "Gastroenteritis",
            "GERD",
            "Peptic ulcer",
            "Gallbladder disease",
            "Pancreatitis",
            "Appendicitis",
            "Kidney stones",
        ],
    ),
    (
        "vomiting",
        &[
            "Gastroenteritis",
            "Food poisoning",
            "Migraine",
            "Pregnancy",
            "Gastritis",
            "Peptic ulcer",
            "Appendicitis",
            "Intestinal obstruction",
            "Brain tumor",
            "Increased intracranial pressure",
        ],
    ),
    (
        "diarrhea",
        &[
            "Gastroenteritis",
            "Food poisoning",
            "Irritable bowel syndrome",
            "Inflammatory bowel disease",
            "Celiac disease",
            "Lactose intolerance",
            "Medication side effect",
            "Infection",
        ],
    ),
    (
        "constipation",
        &[
            "Irritable bowel syndrome",
            "Dehydration",
            "Low fiber diet",
            "Medication side effect",
            "Hypothyroidism",
            "Colon cancer",
            "Neurological disorder",
        ],
    ),
    (
        "abdominal pain",
        &[
            "Gastritis",
            "Appendicitis",
            "Irritable bowel syndrome",
            "Food poisoning",
            "Peptic ulcer",
            "Gallbladder disease",
            "Pancreatitis",
            "Kidney stones",
            "Diverticulitis",
            "Inflammatory bowel disease",
        ],
    ),
    (
        "heartburn",
        &[
            "GERD",
            "Peptic ulcer",
            "Hiatal hernia",
            "Gastritis",
            "Esophagitis",
            "Anxiety",
            "Pregnancy",
        ],
    ),
    (
        "indigestion",
        &[
            "GERD",
            "Peptic ulcer",
            "Gastritis",
            "Gallbladder disease",
            "Anxiety",
            "Food intolerance",
        ],
    ),
    (
        "bloating",
        &[
            "Irritable bowel syndrome",
            "Food intolerance",
            "Celiac disease",
            "Inflammatory bowel disease",
            "Small intestinal bacterial overgrowth",
            "Constipation",
        ],
    ),
    (
        "loss of appetite",
        &[
            "Depression",
            "Anxiety",
            "Infection",
            "Cancer",
            "Liver disease",
            "Kidney disease",
            "Medication side effect",
            "Eating disorder",
        ],
    ),
    (
        "back pain",
        &[
            "Muscle strain",
            "Herniated disc",
            "Kidney stones",
            "Poor posture",
            "Osteoarthritis",
            "Spinal stenosis",
            "Spondylolisthesis",
            "Osteoporosis",
            "Ankylosing spondylitis",
            "Fibromyalgia",
        ],
    ),
    (
        "joint pain",
        &[
            "Osteoarthritis",
            "Rheumatoid arthritis",
            "Gout",
            "Lupus",
            "Psoriatic arthritis",
            "Injury",
            "Infection",
            "Fibromyalgia",
        ],
    ),
    (
        "muscle pain",
        &[
            "Fibromyalgia",
            "Polymyalgia rheumatica",
            "Injury",
            "Infection",
            "Medication side effect",
            "Vitamin D deficiency",
            "Electrolyte imbalance",
        ],
    ),
    (
        "stiffness",
        &[
            "Osteoarthritis",
            "Rheumatoid arthritis",
            "Ankylosing spondylitis",
            "Fibromyalgia",
            "Parkinson's disease",
            "Multiple sclerosis",
        ],
    ),
    (
        "swelling",
        &[
            "Injury",
            "Infection",
            "Arthritis",
            "Heart failure",
            "Kidney disease",
            "Liver disease",
            "Allergic reaction",
            "Deep vein thrombosis",
        ],
    ),
    (
        "frequent urination",
        &[
            "Diabetes",
            "Urinary tract infection",
            "Prostate enlargement",
            "Overactive bladder",
            "Pregnancy",
            "Diuretic medication",
            "Anxiety",
        ],
    ),
    (
        "painful urination",
        &[
            "Urinary tract infection",
            "Sexually transmitted infection",
            "Kidney stones",
            "Prostatitis",
            "Vaginitis",
            "Urethritis",
        ],
    ),
    (
        "blood in urine",
        &[
            "Urinary tract infection",
            "Kidney stones",
            "Bladder cancer",
            "Kidney cancer",
            "Prostate cancer",
            "Glomerulonephritis",
            "Trauma",
        ],
    ),
    (
        "incontinence",
        &[
            "Overactive bladder",
            "Prostate enlargement",
            "Neurological disorder",
            "Pregnancy",
            "Childbirth",
            "Aging",
            "Medication side effect",
        ],
    ),
    (
        "rash",
        &[
            "Allergic reaction",
            "Eczema",
            "Psoriasis",
            "Contact dermatitis",
            "Viral infection",
            "Bacterial infection",
            "Fungal infection",
            "Lupus",
            "Drug reaction",
        ],
    ),
    (
        "itching",
        &[
            "Allergic reaction",
            "Eczema",
            "Psoriasis",
            "Contact dermatitis",
            "Liver disease",
            "Kidney disease",
            "Diabetes",
            "Anxiety",
            "Parasitic infection",
        ],
    ),
    (
        "hives",
        &[
            "Allergic reaction",
            "Food allergy",
            "Drug allergy",
            "Insect bite",
            "Stress",
            "Infection",
            "Autoimmune disorder",
        ],
    ),
    (
        "acne",
        &[
            "Hormonal changes",
            "Stress",
            "Diet",
            "Medication side effect",
            "Polycystic ovary syndrome",
            "Cushing's syndrome",
        ],
    ),
    (
        "fatigue",
        &[
            "Anemia",
            "Depression",
            "Chronic fatigue syndrome",
            "Sleep disorder",
            "Hypothyroidism",
            "Diabetes",
            "Adrenal insufficiency",
            "Cancer",
            "Chronic disease",
            "Medication side effect",
        ],
    ),
    (
        "weight loss",
        &[
            "Cancer",
            "Hyperthyroidism",
            "Diabetes",
            "Depression",
            "Eating disorder",
            "Chronic disease",
            "Infection",
            "Malabsorption",
        ],
    ),
    (
        "weight gain",
        &[
            "Hypothyroidism",
            "Cushing's syndrome",
            "Depression",
            "Medication side effect",
            "Polycystic ovary syndrome",
            "Pregnancy",
            "Menopause",
        ],
    ),
    (
        "excessive thirst",
        &[
            "Diabetes",
            "Diabetes insipidus",
            "Dehydration",
            "Hypercalcemia",
            "Medication side effect",
        ],
    ),
    (
        "excessive hunger",
        &[
            "Diabetes",
            "Hyperthyroidism",
            "Hypoglycemia",
            "Pregnancy",
            "Medication side effect",
        ],
    ),
    (
        "anxiety",
        &[
            "Generalized anxiety disorder",
            "Panic disorder",
            "Social anxiety disorder",
            "Depression",
            "Post-traumatic stress disorder",
            "Obsessive-compulsive disorder",
            "Thyroid disorder",
            "Medication side effect",
        ],
    ),
    (
        "depression",
        &[
            "Major depressive disorder",
            "Bipolar disorder",
            "Seasonal affective disorder",
            "Postpartum depression",
            "Thyroid disorder",
            "Vitamin D deficiency",
            "Medication side effect",
        ],
    ),
    (
        "insomnia",
        &[
            "Anxiety",
            "Depression",
            "Sleep apnea",
            "Restless leg syndrome",
            "Medication side effect",
            "Caffeine",
            "Stress",
            "Chronic pain",
        ],
    ),
    (
        "mood swings",
        &[
            "Bipolar disorder",
            "Premenstrual syndrome",
            "Menopause",
            "Thyroid disorder",
            "Medication side effect",
            "Stress",
            "Hormonal changes",
        ],
    ),
    (
        "blurred vision",
        &[
            "Diabetes",
            "Hypertension",
            "Glaucoma",
            "Cataracts",
            "Macular degeneration",
            "Migraine",
            "Multiple sclerosis",
            "Medication side effect",
        ],
    ),
    (
        "eye pain",
        &[
            "Glaucoma",
            "Uveitis",
            "Corneal abrasion",
            "Sinusitis",
            "Migraine",
            "Cluster headache",
            "Infection",
        ],
    ),
    (
        "red eyes",
        &[
            "Conjunctivitis",
            "Allergies",
            "Dry eyes",
            "Uveitis",
            "Glaucoma",
            "Infection",
            "Irritation",
        ],
    ),
    (
        "floaters",
        &[
            "Age-related changes",
            "Retinal detachment",
            "Diabetic retinopathy",
            "Migraine",
            "Eye injury",
        ],
    ),
    (
        "ear pain",
        &[
            "Otitis media",
            "Otitis externa",
            "Earwax impaction",
            "Temporomandibular joint disorder",
            "Dental problem",
            "Throat infection",
        ],
    ),
    (
        "hearing loss",
        &[
            "Age-related hearing loss",
            "Noise exposure",
            "Otitis media",
            "Meniere's disease",
            "Acoustic neuroma",
            "Medication side effect",
        ],
    ),
    (
        "tinnitus",
        &[
            "Age-related hearing loss",
            "Noise exposure",
            "Meniere's disease",
            "Medication side effect",
            "Anxiety",
            "Earwax impaction",
        ],
    ),
    (
        "easy bruising",
        &[
            "Thrombocytopenia",
            "Leukemia",
            "Liver disease",
            "Vitamin K deficiency",
            "Medication side effect",
            "Aging",
        ],
    ),
    (
        "bleeding gums",
        &[
            "Gingivitis",
            "Periodontitis",
            "Vitamin C deficiency",
            "Thrombocytopenia",
            "Leukemia",
            "Medication side effect",
        ],
    ),
    (
        "pale skin",
        &[
            "Anemia",
            "Iron deficiency",
            "Vitamin B12 deficiency",
            "Chronic disease",
            "Cancer",
            "Blood loss",
        ],
    ),
    (
        "swollen lymph nodes",
        &[
            "Infection",
            "Mononucleosis",
            "Tuberculosis",
            "Lymphoma",
            "Leukemia",
            "Autoimmune disorder",
            "Cancer",
        ],
    ),
    (
        "recurrent infections",
        &[
            "Immunodeficiency",
            "Diabetes",
            "HIV/AIDS",
            "Cancer",
            "Medication side effect",
            "Chronic disease",
        ],
    ),
    (
        "excessive sweating",
        &[
            "Hyperthyroidism",
            "Anxiety",
            "Menopause",
            "Infection",
            "Medication side effect",
            "Diabetes",
            "Pheochromocytoma",
        ],
    ),
    (
        "cold intolerance",
        &[
            "Hypothyroidism",
            "Anemia",
            "Anorexia nervosa",
            "Adrenal insufficiency",
            "Poor circulation",
        ],
    ),
    (
        "heat intolerance",
        &[
            "Hyperthyroidism",
            "Menopause",
            "Anxiety",
            "Medication side effect",
            "Multiple sclerosis",
        ],
    ),
];

/// Condition to medication suggestions.
pub(crate) static CONDITION_MEDICATIONS: &[(&str, &[MedicationRow])] = &[
    (
        "Common cold",
        &[
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Ibuprofen", "200-400mg", "Every 4-6 hours", "As needed"),
            ("Decongestant (Pseudoephedrine)", "30-60mg", "Every 4-6 hours", "3-5 days"),
            ("Cough suppressant (Dextromethorphan)", "15-30mg", "Every 4-6 hours", "3-5 days"),
            ("Zinc supplements", "15-30mg", "Once daily", "5-7 days"),
        ],
    ),
    (
        "Flu",
        &[
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Ibuprofen", "400-600mg", "Every 6-8 hours", "As needed"),
            ("Oseltamivir (Tamiflu)", "75mg", "Twice daily", "5 days"),
            ("Rest and fluids", "N/A", "Continuous", "Until recovery"),
        ],
    ),
    (
        "Asthma",
        &[
            ("Albuterol inhaler", "2 puffs", "Every 4-6 hours as needed", "As needed"),
            ("Fluticasone inhaler", "100-500mcg", "Twice daily", "Long-term"),
            ("Montelukast", "10mg", "Once daily", "Long-term"),
            ("Prednisone", "40-60mg", "Once daily", "5-7 days (flare)"),
        ],
    ),
    (
        "Pneumonia",
        &[
            ("Amoxicillin", "500mg", "Three times daily", "7-10 days"),
            ("Azithromycin", "500mg", "Once daily", "3-5 days"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Rest and fluids", "N/A", "Continuous", "Until recovery"),
        ],
    ),
    (
        "Bronchitis",
        &[
            ("Guaifenesin", "200-400mg", "Every 4 hours", "Until cough improves"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Ibuprofen", "400-600mg", "Every 6-8 hours", "As needed"),
            ("Rest and fluids", "N/A", "Continuous", "Until recovery"),
        ],
    ),
    (
        "Angina",
        &[
            ("Nitroglycerin", "0.4mg sublingual", "As needed for chest pain", "As needed"),
            ("Aspirin", "81mg", "Once daily", "Long-term"),
            ("Metoprolol", "25-50mg", "Twice daily", "As prescribed"),
            ("Atorvastatin", "10-20mg", "Once daily", "Long-term"),
        ],
    ),
    (
        "Hypertension",
        &[
            ("Lisinopril", "10-40mg", "Once daily", "Long-term"),
            ("Amlodipine", "5-10mg", "Once daily", "Long-term"),
            ("Hydrochlorothiazide", "12.5-25mg", "Once daily", "Long-term"),
            ("Metoprolol", "25-100mg", "Twice daily", "Long-term"),
        ],
    ),
    (
        "Heart failure",
        &[
            ("Furosemide", "20-80mg", "Once daily", "As prescribed"),
            ("Lisinopril", "5-40mg", "Once daily", "Long-term"),
            ("Metoprolol", "25-100mg", "Twice daily", "Long-term"),
            ("Digoxin", "0.125-0.25mg", "Once daily", "As prescribed"),
        ],
    ),
    (
        "Migraine",
        &[
            ("Sumatriptan", "25-100mg", "At onset of migraine", "As needed"),
            ("Ibuprofen", "400-800mg", "Every 6-8 hours", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Propranolol", "20-40mg", "Twice daily", "As prescribed for prevention"),
        ],
    ),
    (
        "Tension headache",
        &[
            ("Ibuprofen", "400-800mg", "Every 6-8 hours", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Aspirin", "325-650mg", "Every 4-6 hours", "As needed"),
            ("Naproxen", "250-500mg", "Every 8-12 hours", "As needed"),
        ],
    ),
    (
        "Epilepsy",
        &[
            ("Levetiracetam", "500-1500mg", "Twice daily", "Long-term"),
            ("Lamotrigine", "25-200mg", "Twice daily", "Long-term"),
            ("Carbamazepine", "200-1200mg", "Twice daily", "Long-term"),
            ("Valproic acid", "250-1000mg", "Twice daily", "Long-term"),
        ],
    ),
    (
        "Gastritis",
        &[
            ("Omeprazole", "20mg", "Once daily", "4-8 weeks"),
            ("Ranitidine", "150mg", "Twice daily", "4-8 weeks"),
            ("Sucralfate", "1g", "Four times daily", "4-8 weeks"),
            ("Antacids", "As directed", "As needed", "As needed"),
        ],
    ),
    (
        "GERD",
        &[
            ("Omeprazole", "20-40mg", "Once daily", "4-8 weeks"),
            ("Esomeprazole", "20-40mg", "Once daily", "4-8 weeks"),
            ("Ranitidine", "150mg", "Twice daily", "4-8 weeks"),
            ("Antacids", "As directed", "As needed", "As needed"),
        ],
    ),
    (
        "Irritable bowel syndrome",
        &[
            ("Dicyclomine", "10-20mg", "Four times daily", "As needed"),
            ("Loperamide", "2mg", "After each loose stool", "As needed"),
            ("Psyllium", "1-2 tablespoons", "Once daily", "Long-term"),
            ("Probiotics", "As directed", "Once daily", "Long-term"),
        ],
    ),
    (
        "Peptic ulcer",
        &[
            ("Omeprazole", "20-40mg", "Once daily", "4-8 weeks"),
            ("Amoxicillin", "500mg", "Twice daily", "7-14 days"),
            ("Clarithromycin", "500mg", "Twice daily", "7-14 days"),
            ("Bismuth subsalicylate", "525mg", "Four times daily", "14 days"),
        ],
    ),
    (
        "Osteoarthritis",
        &[
            ("Ibuprofen", "400-800mg", "Three times daily", "As needed"),
            ("Naproxen", "250-500mg", "Twice daily", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Glucosamine", "1500mg", "Once daily", "Long-term"),
        ],
    ),
    (
        "Rheumatoid arthritis",
        &[
            ("Methotrexate", "7.5-25mg", "Once weekly", "Long-term"),
            ("Prednisone", "5-20mg", "Once daily", "As prescribed"),
            ("Ibuprofen", "400-800mg", "Three times daily", "As needed"),
            ("Hydroxychloroquine", "200-400mg", "Once daily", "Long-term"),
        ],
    ),
    (
        "Gout",
        &[
            ("Colchicine", "0.6mg", "Every 1-2 hours", "Until attack resolves"),
            ("Indomethacin", "25-50mg", "Three times daily", "3-5 days"),
            ("Allopurinol", "100-300mg", "Once daily", "Long-term"),
            ("Probenecid", "250-500mg", "Twice daily", "Long-term"),
        ],
    ),
    (
        "Fibromyalgia",
        &[
            ("Duloxetine", "30-60mg", "Once daily", "Long-term"),
            ("Pregabalin", "150-300mg", "Twice daily", "Long-term"),
            ("Amitriptyline", "10-50mg", "Once daily at bedtime", "Long-term"),
            ("Cyclobenzaprine", "5-10mg", "Three times daily", "As needed"),
        ],
    ),
    (
        "Diabetes",
        &[
            ("Metformin", "500-1000mg", "Twice daily", "Long-term"),
            ("Glimepiride", "1-4mg", "Once daily", "As prescribed"),
            ("Sitagliptin", "100mg", "Once daily", "As prescribed"),
            ("Insulin (if needed)", "As prescribed", "As prescribed", "As prescribed"),
        ],
    ),
    (
        "Hypothyroidism",
        &[
            ("Levothyroxine", "25-200mcg", "Once daily", "Long-term"),
            ("Liothyronine", "5-25mcg", "Once daily", "As prescribed"),
            ("Armour Thyroid", "30-120mg", "Once daily", "As prescribed"),
        ],
    ),
    (
        "Hyperthyroidism",
        &[
            ("Methimazole", "5-60mg", "Once daily", "As prescribed"),
            ("Propranolol", "10-40mg", "Three times daily", "As prescribed"),
            ("Propylthiouracil", "50-600mg", "Three times daily", "As prescribed"),
        ],
    ),
    (
        "Depression",
        &[
            ("Sertraline", "25-200mg", "Once daily", "As prescribed"),
            ("Fluoxetine", "20-80mg", "Once daily", "As prescribed"),
            ("Escitalopram", "10-20mg", "Once daily", "As prescribed"),
            ("Bupropion", "150-300mg", "Twice daily", "As prescribed"),
        ],
    ),
    (
        "Anxiety",
        &[
            ("Alprazolam", "0.25-0.5mg", "As needed for anxiety", "Short-term only"),
            ("Lorazepam", "0.5-2mg", "As needed", "Short-term only"),
            ("Sertraline", "25-200mg", "Once daily", "As prescribed"),
            ("Buspirone", "5-15mg", "Three times daily", "As prescribed"),
        ],
    ),
    (
        "Bipolar disorder",
        &[
            ("Lithium", "300-1200mg", "Once daily", "Long-term"),
            ("Valproic acid", "250-1000mg", "Twice daily", "Long-term"),
            ("Lamotrigine", "25-200mg", "Twice daily", "Long-term"),
            ("Quetiapine", "100-800mg", "Once daily", "As prescribed"),
        ],
    ),
    (
        "Urinary tract infection",
        &[
            ("Trimethoprim-sulfamethoxazole", "160/800mg", "Twice daily", "3 days"),
            ("Nitrofurantoin", "100mg", "Twice daily", "5 days"),
            ("Ciprofloxacin", "250-500mg", "Twice daily", "3 days"),
            ("Phenazopyridine", "200mg", "Three times daily", "2 days"),
        ],
    ),
    (
        "Kidney stones",
        &[
            ("Ibuprofen", "400-800mg", "Every 6-8 hours", "As needed"),
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Tamsulosin", "0.4mg", "Once daily", "Until stone passes"),
            ("Increased fluid intake", "N/A", "Continuous", "Until stone passes"),
        ],
    ),
    (
        "Eczema",
        &[
            ("Hydrocortisone cream", "1%", "Twice daily", "As needed"),
            ("Triamcinolone cream", "0.1%", "Twice daily", "As needed"),
            ("Cetirizine", "10mg", "Once daily", "As needed"),
            ("Moisturizer", "As needed", "Multiple times daily", "Long-term"),
        ],
    ),
    (
        "Psoriasis",
        &[
            ("Triamcinolone cream", "0.1%", "Twice daily", "As needed"),
            ("Calcipotriene cream", "0.005%", "Twice daily", "As needed"),
            ("Methotrexate", "7.5-25mg", "Once weekly", "As prescribed"),
            ("Acitretin", "10-50mg", "Once daily", "As prescribed"),
        ],
    ),
    (
        "Conjunctivitis",
        &[
            ("Erythromycin ointment", "0.5%", "Four times daily", "5-7 days"),
            ("Ciprofloxacin drops", "0.3%", "Four times daily", "5-7 days"),
            ("Artificial tears", "As needed", "As needed", "As needed"),
            ("Antihistamine drops", "As directed", "As needed", "As needed"),
        ],
    ),
    (
        "Glaucoma",
        &[
            ("Timolol drops", "0.25-0.5%", "Twice daily", "Long-term"),
            ("Latanoprost drops", "0.005%", "Once daily", "Long-term"),
            ("Dorzolamide drops", "2%", "Three times daily", "Long-term"),
            ("Brimonidine drops", "0.15%", "Three times daily", "Long-term"),
        ],
    ),
    (
        "Tuberculosis",
        &[
            ("Isoniazid", "300mg", "Once daily", "6-9 months"),
            ("Rifampin", "600mg", "Once daily", "6-9 months"),
            ("Pyrazinamide", "15-30mg/kg", "Once daily", "2 months"),
            ("Ethambutol", "15-25mg/kg", "Once daily", "2 months"),
        ],
    ),
    (
        "Malaria",
        &[
            ("Chloroquine", "600mg", "Once daily", "3 days"),
            ("Artemether-lumefantrine", "As directed", "Twice daily", "3 days"),
            ("Atovaquone-proguanil", "As directed", "Once daily", "3 days"),
            ("Doxycycline", "100mg", "Twice daily", "7 days"),
        ],
    ),
    (
        "Lupus",
        &[
            ("Hydroxychloroquine", "200-400mg", "Once daily", "Long-term"),
            ("Prednisone", "5-60mg", "Once daily", "As prescribed"),
            ("Methotrexate", "7.5-25mg", "Once weekly", "As prescribed"),
            ("Mycophenolate", "500-1000mg", "Twice daily", "As prescribed"),
        ],
    ),
    (
        "Multiple sclerosis",
        &[
            ("Interferon beta-1a", "30mcg", "Once weekly", "Long-term"),
            ("Glatiramer acetate", "20mg", "Once daily", "Long-term"),
            ("Fingolimod", "0.5mg", "Once daily", "Long-term"),
            ("Natalizumab", "300mg", "Once monthly", "Long-term"),
        ],
    ),
    (
        "Cancer",
        &[
            ("Chemotherapy", "As prescribed", "As prescribed", "As prescribed"),
            ("Radiation therapy", "As prescribed", "As prescribed", "As prescribed"),
            ("Targeted therapy", "As prescribed", "As prescribed", "As prescribed"),
            ("Immunotherapy", "As prescribed", "As prescribed", "As prescribed"),
        ],
    ),
    (
        "Pain",
        &[
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "As needed"),
            ("Ibuprofen", "200-400mg", "Every 6-8 hours", "As needed"),
            ("Naproxen", "250-500mg", "Every 8-12 hours", "As needed"),
            ("Aspirin", "325-650mg", "Every 4-6 hours", "As needed"),
        ],
    ),
    (
        "Fever",
        &[
            ("Acetaminophen", "500-1000mg", "Every 4-6 hours", "Until fever breaks"),
            ("Ibuprofen", "200-400mg", "Every 6-8 hours", "Until fever breaks"),
            ("Aspirin", "325-650mg", "Every 4-6 hours", "Until fever breaks"),
        ],
    ),
    (
        "Cough",
        &[
            ("Honey", "1-2 teaspoons", "As needed", "Until cough improves"),
            ("Guaifenesin", "200-400mg", "Every 4 hours", "Until cough improves"),
            ("Dextromethorphan", "15-30mg", "Every 4-6 hours", "3-5 days"),
            ("Codeine", "10-20mg", "Every 4-6 hours", "As prescribed"),
        ],
    ),
    (
        "Allergies",
        &[
            ("Cetirizine", "10mg", "Once daily", "As needed"),
            ("Loratadine", "10mg", "Once daily", "As needed"),
            ("Fexofenadine", "180mg", "Once daily", "As needed"),
            ("Diphenhydramine", "25-50mg", "Every 4-6 hours", "As needed"),
        ],
    ),
    (
        "Insomnia",
        &[
            ("Melatonin", "3-5mg", "Once daily at bedtime", "As needed"),
            ("Diphenhydramine", "25-50mg", "Once daily at bedtime", "As needed"),
            ("Zolpidem", "5-10mg", "Once daily at bedtime", "As prescribed"),
            ("Trazodone", "25-100mg", "Once daily at bedtime", "As prescribed"),
        ],
    ),
    (
        "Nausea",
        &[
            ("Ondansetron", "4-8mg", "Every 8 hours", "As needed"),
            ("Metoclopramide", "10mg", "Three times daily", "As needed"),
            ("Dimenhydrinate", "25-50mg", "Every 4-6 hours", "As needed"),
            ("Ginger", "250-500mg", "Three times daily", "As needed"),
        ],
    ),
    (
        "Diarrhea",
        &[
            ("Loperamide", "2mg", "After each loose stool", "Until diarrhea resolves"),
            ("Bismuth subsalicylate", "525mg", "Every 30-60 minutes", "Until diarrhea resolves"),
            ("Probiotics", "As directed", "Once daily", "Until diarrhea resolves"),
            ("Oral rehydration solution", "As needed", "As needed", "Until diarrhea resolves"),
        ],
    ),
    (
        "Constipation",
        &[
            ("Psyllium", "1-2 tablespoons", "Once daily", "As needed"),
            ("Docusate sodium", "100mg", "Once daily", "As needed"),
            ("Bisacodyl", "5-10mg", "Once daily", "As needed"),
            ("Polyethylene glycol", "17g", "Once daily", "As needed"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SYMPTOM_CONDITIONS.len(), 66);
        assert_eq!(CONDITION_MEDICATIONS.len(), 44);
    }

    #[test]
    fn test_keywords_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for (keyword, conditions) in SYMPTOM_CONDITIONS {
            assert_eq!(*keyword, keyword.to_lowercase());
            assert!(seen.insert(*keyword), "duplicate keyword {}", keyword);
            assert!(!conditions.is_empty());
        }
    }

    #[test]
    fn test_medication_rows_have_text() {
        for (condition, rows) in CONDITION_MEDICATIONS {
            assert!(!rows.is_empty(), "no medications for {}", condition);
            for (name, dosage, frequency, duration) in rows.iter() {
                assert!(!name.is_empty());
                assert!(!dosage.is_empty());
                assert!(!frequency.is_empty());
                assert!(!duration.is_empty());
            }
        }
    }
}
