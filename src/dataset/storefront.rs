//! 门店问答表（默认数据集）

use crate::models::CategorySpec;

pub const GREETINGS: &str = "greetings";

/// 优先扫描的类别
pub const PRIORITY: &[&str] = &["sizing", "payment", "delivery", "thanks"];

pub const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: GREETINGS,
        patterns: &[
            r"\b(hi|hello|hey|jambo|mambo|hallo|good morning|good afternoon|good evening)\b",
            r"\b(habari|salamu|hujambo)\b",
        ],
        responses: &[
            "Jambo! Karibu to FashionHub Kenya! 🇰🇪 How can I help you find the perfect outfit today?",
            "Hello! Welcome to our fashion family. Ungependa nini leo? (What would you like today?)",
            "Habari! Welcome to FashionHub Kenya. How may I assist you with your fashion needs?",
            "Mambo vipi? Ready to explore our latest Kenyan fashion? What can I help you find?",
        ],
        follow_up: None,
    },
    CategorySpec {
        name: "payment",
        patterns: &[
            r"\b(mpesa|m-pesa|payment|pay|money|cost|price|lipa|malipo)\b",
            r"\b(till|paybill|send money|how to pay)\b",
        ],
        responses: &[
            "We accept multiple payment methods:\n\n💳 M-Pesa (Till: 789123)\n💰 Cash on Delivery (Nairobi only)\n🏦 Bank Transfer\n\nTo pay via M-Pesa:\n1. Go to Lipa na M-Pesa\n2. Buy Goods and Services\n3. Till: 789123\n4. Enter amount & PIN\n\nNeed help? Call 0700-123-456",
            "Payment options:\n\n• M-Pesa: Instant confirmation (Till: 789123)\n• Cash on Delivery: +KSh 100 service fee\n• Bank: Co-op Bank 1234567890\n\nFree delivery for orders >KSh 5,000! Want me to explain any option?",
        ],
        follow_up: None,
    },
    CategorySpec {
        name: "traditional_wear",
        patterns: &[
            r"\b(kitenge|ankara|traditional|african|dashiki|kanga|cultural|nguo za kitamaduni)\b",
            r"\b(wedding|harusi|office wear|kazini|sherehe)\b",
        ],
        responses: &[
            "Our traditional collection is stunning! 🌍\n\n👗 Kitenge dresses: KSh 2,500 - 4,500\n👔 Ankara suits: KSh 4,000 - 7,000\n👘 Kanga sets: KSh 1,800 - 3,000\n\nWhat occasion are you shopping for? We have sizes 8-22 available.",
            "Beautiful African prints available! ✨\n\n• Latest Kitenge designs\n• Custom Ankara outfits\n• Kanga accessories\n\nPerfect for weddings, cultural events, or office wear. Would you like size recommendations?",
        ],
        follow_up: Some("\n\nShould I show you our best sellers?"),
    },
    CategorySpec {
        name: "sizing",
        patterns: &[
            r"\b(size|fit|measurement|small|medium|large|xl|saizi|kipimo|ukubwa)\b",
            r"\b(chest|bust|waist|hips|size guide|how to measure)\b",
        ],
        responses: &[
            "Let me help with sizing! 📏 What type of clothing are you interested in? (dresses, shirts, trousers etc.)",
            "I have a detailed size guide! Please tell me:\n1. Clothing type\n2. Your measurements\n3. Preferred fit\n\nOr ask 'How to measure' for instructions!",
        ],
        follow_up: None,
    },
    CategorySpec {
        name: "delivery",
        patterns: &[
            r"\b(delivery|shipping|transport|send|courier|peleka|utoaji)\b",
            r"\b(nairobi|mombasa|kisumu|nakuru|upcountry|how long|delivery time)\b",
        ],
        responses: &[
            "Delivery options: 🚚\n\n• Nairobi CBD: KSh 300 (2-4 hrs)\n• Nairobi Residential: KSh 400 (same day)\n• Major Towns: KSh 500 (2-3 days)\n• Upcountry: KSh 800 (3-5 days)\n\nFREE delivery for orders >KSh 5,000!",
            "Our delivery network covers all Kenya:\n\n⚡ Express: Same day (Nairobi)\n🚐 Standard: 1-2 days (Major towns)\n🚛 Economy: 3-5 days (Countrywide)\n\nWhere should we deliver? I can give exact estimates!",
        ],
        follow_up: Some("\n\nWould you like to check delivery times for your area?"),
    },
    CategorySpec {
        name: "products",
        patterns: &[
            r"\b(dress|shirt|trouser|suit|casual|formal|show me|what do you have|nguo)\b",
            r"\b(blouse|skirt|jacket|jeans|tops|collection|styles|outfits)\b",
        ],
        responses: &[
            "Our collections: 🛍️\n\n👗 Dresses: KSh 1,500 - 4,000\n👔 Suits: KSh 3,000 - 8,000\n👕 Casual wear: KSh 800 - 2,500\n🌍 Traditional: KSh 2,000 - 5,500\n👚 Office wear: KSh 1,200 - 3,500\n\nWhat style interests you?",
            "Latest arrivals: ✨\n\n• New corporate collection\n• Wedding & event dresses\n• African print specials\n• Weekend casual range\n\nAll sizes 8-22 available. What would you like to see?",
        ],
        follow_up: Some("\n\nWould you like size recommendations for any item?"),
    },
    CategorySpec {
        name: "store_info",
        patterns: &[
            r"\b(location|address|where|contact|phone|hours|duka|mahali)\b",
            r"\b(directions|map|find you|visit)\b",
        ],
        responses: &[
            "Visit FashionHub Kenya: 📍\n\n🏢 Tom Mboya Street, Nairobi CBD\n📍 Near Kencom House (Blue Building)\n📞 0700-123-456\n💬 WhatsApp: 0700-123-456\n🕒 Mon-Sat: 8AM-7PM\n❌ Sunday: Closed",
            "Find us easily! 🗺️\n\n📍 Tom Mboya Street, CBD\n🚌 Near Kencom Bus Stage\n🅿️ Free parking\n🚶 2 min from Kencom\n\nLook for the blue building with orange signage! Need directions?",
        ],
        follow_up: None,
    },
    CategorySpec {
        name: "thanks",
        patterns: &[
            r"\b(thanks|thank you|asante|shukrani|appreciate)\b",
            r"\b(helpful|nice|good job|great)\b",
        ],
        responses: &[
            "Asante sana! 😊 Happy to help! Anything else I can assist with?",
            "Karibu! Always here for your fashion needs. What else can I do for you today?",
        ],
        follow_up: None,
    },
];
