//! Built-in narration scripts, one per language.

pub(super) const ENGLISH: &str = r"KrishiMitraAI is an intelligent farming assistant that helps farmers make the right decisions throughout the crop lifecycle — from sowing to harvest.

Farmers share details in their native language, while IoT sensors collect real-time field data like soil moisture and weather conditions. Using agentic AI, KrishiMitraAI understands crop stages and local conditions to recommend the best actions at the right time — irrigation, fertilizer, pest control, and harvesting.

As conditions change, the AI updates its guidance automatically, providing continuous and personalized support.

KrishiMitraAI — your trusted AI partner in agriculture.";

pub(super) const HINDI: &str = r"स्वागत है KrishiMitraAI में।

KrishiMitraAI एक बुद्धिमान कृषि सहायक है, जो बीज बोने से लेकर कटाई तक किसानों को सही निर्णय लेने में मदद करता है।

किसान अपनी स्थानीय भाषा में जानकारी देते हैं और खेत में लगे IoT सेंसर मौसम व मिट्टी की जानकारी इकट्ठा करते हैं। एजेंटिक AI इस डेटा को समझकर सिंचाई, खाद, कीट नियंत्रण और कटाई के लिए सही समय पर सही सलाह देता है।

परिस्थितियाँ बदलते ही सलाह भी अपडेट हो जाती है।

KrishiMitraAI — खेती के लिए आपका भरोसेमंद AI मित्र।";

pub(super) const MARATHI: &str = r"KrishiMitraAI मध्ये आपले स्वागत आहे.

KrishiMitraAI हा एक बुद्धिमान कृषी सहाय्यक आहे, जो पेरणीपासून कापणीपर्यंत शेतकऱ्यांना योग्य निर्णय घेण्यास मदत करतो.

शेतकरी आपल्या स्थानिक भाषेत माहिती देतात आणि IoT सेन्सर्स माती व हवामानाचा डेटा गोळा करतात. एजेंटिक AI या माहितीच्या आधारे पाणी, खत, कीड नियंत्रण आणि कापणीसाठी योग्य सल्ला योग्य वेळी देतो.

परिस्थिती बदलल्यावर सल्ला आपोआप अपडेट होतो.

KrishiMitraAI — शेतीसाठी तुमचा विश्वासू AI मित्र।";

pub(super) const TELUGU: &str = r"KrishiMitraAI కి స్వాగతం.

KrishiMitraAI ఒక తెలివైన వ్యవసాయ సహాయకుడు. ఇది విత్తనాలు వేసిన దశ నుండి పంట కోత వరకు రైతులకు సరైన నిర్ణయాలు తీసుకునేలా సహాయం చేస్తుంది.

రైతులు తమ స్థానిక భాషలో సమాచారం ఇస్తారు. పొలాల్లో ఉన్న IoT సెన్సర్లు మట్టి తేమ, వాతావరణ పరిస్థితుల వంటి డేటాను సేకరిస్తాయి. ఏజెంటిక్ AI ఈ సమాచారాన్ని విశ్లేషించి నీరు, ఎరువులు, పురుగుల నియంత్రణ మరియు కోతకు సంబంధించిన సరైన సూచనలు సరైన సమయంలో అందిస్తుంది.

పరిస్థితులు మారినప్పుడు సలహాలు కూడా స్వయంచాలకంగా మారుతాయి.

KrishiMitraAI — వ్యవసాయానికి మీ నమ్మకమైన AI మిత్రుడు.";

pub(super) const BENGALI: &str = r"KrishiMitraAI-এ আপনাকে স্বাগতম।

KrishiMitraAI একটি বুদ্ধিমান কৃষি সহকারী, যা বীজ বপন থেকে ফসল কাটার পর্যন্ত কৃষকদের সঠিক সিদ্ধান্ত নিতে সাহায্য করে।

কৃষকরা তাদের নিজস্ব ভাষায় তথ্য দেন এবং মাঠে বসানো IoT সেন্সর মাটির আর্দ্রতা ও আবহাওয়ার তথ্য সংগ্রহ করে। এজেন্টিক AI এই তথ্য বিশ্লেষণ করে সেচ, সার, পোকা নিয়ন্ত্রণ এবং ফসল কাটার জন্য সঠিক সময়ে সঠিক পরামর্শ দেয়।

পরিস্থিতি পরিবর্তন হলে পরামর্শও স্বয়ংক্রিয়ভাবে আপডেট হয়।

KrishiMitraAI — কৃষির জন্য আপনার বিশ্বস্ত AI সঙ্গী।";
